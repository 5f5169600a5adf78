mod parser;

use crate::workflows::roster::{InMemoryRoster, Technician};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    DuplicateTechnician(String),
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::DuplicateTechnician(id) => {
                write!(f, "technician id {} appears more than once", id)
            }
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::DuplicateTechnician(_) => None,
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads a technician roster and trip log from CSV exports.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        technicians: P,
        trips: Q,
    ) -> Result<InMemoryRoster, RosterImportError> {
        let technicians = std::fs::File::open(technicians)?;
        let trips = std::fs::File::open(trips)?;
        Self::from_readers(technicians, trips)
    }

    pub fn from_readers<T: Read, R: Read>(
        technicians: T,
        trips: R,
    ) -> Result<InMemoryRoster, RosterImportError> {
        let technicians = parser::parse_technicians(technicians)?;
        ensure_unique_ids(&technicians)?;
        let trips = parser::parse_trips(trips)?;

        let known: HashSet<&str> = technicians.iter().map(|tech| tech.id.as_str()).collect();
        let orphaned = trips
            .iter()
            .filter(|trip| !known.contains(trip.technician_id.as_str()))
            .count();
        if orphaned > 0 {
            warn!(orphaned, "trip log references unknown technicians");
        }

        info!(
            technicians = technicians.len(),
            trips = trips.len(),
            "imported roster"
        );
        Ok(InMemoryRoster::new(technicians, trips))
    }
}

fn ensure_unique_ids(technicians: &[Technician]) -> Result<(), RosterImportError> {
    let mut seen = HashSet::new();
    for technician in technicians {
        if !seen.insert(technician.id.as_str()) {
            return Err(RosterImportError::DuplicateTechnician(
                technician.id.clone(),
            ));
        }
    }
    Ok(())
}
