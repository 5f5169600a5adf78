use std::sync::Arc;

use super::domain::{Technician, Trip};

/// Supplies the technician roster and trip log to the service.
pub trait RosterSource: Send + Sync {
    fn technicians(&self) -> Result<Vec<Technician>, SourceError>;
    fn trips(&self) -> Result<Vec<Trip>, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("roster source unavailable: {0}")]
    Unavailable(String),
}

/// Immutable snapshot shared between requests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoster {
    technicians: Arc<Vec<Technician>>,
    trips: Arc<Vec<Trip>>,
}

impl InMemoryRoster {
    pub fn new(technicians: Vec<Technician>, trips: Vec<Trip>) -> Self {
        Self {
            technicians: Arc::new(technicians),
            trips: Arc::new(trips),
        }
    }

    pub fn technician_count(&self) -> usize {
        self.technicians.len()
    }

    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }
}

impl RosterSource for InMemoryRoster {
    fn technicians(&self) -> Result<Vec<Technician>, SourceError> {
        Ok(self.technicians.as_ref().clone())
    }

    fn trips(&self) -> Result<Vec<Trip>, SourceError> {
        Ok(self.trips.as_ref().clone())
    }
}
