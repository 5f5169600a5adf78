use super::availability::classify;
use super::dates::day_difference;
use super::domain::{ProcessedTechnician, Technician, Trip, TripRecency, NEVER_TRAVELED_LABEL};
use super::history::{last_trip_date, trip_count_in_year};
use chrono::NaiveDate;
use std::fmt::Write;

pub const DEFAULT_DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Enriches raw technicians with trip statistics relative to a reference date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicianProcessor {
    display_format: String,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid date display format '{0}'")]
pub struct DisplayFormatError(pub String);

/// True when `format` renders a plain calendar date without error.
pub fn is_valid_display_format(format: &str) -> bool {
    if format.is_empty() {
        return false;
    }
    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDate::default().format(format)).is_ok()
}

impl Default for TechnicianProcessor {
    fn default() -> Self {
        Self {
            display_format: DEFAULT_DISPLAY_FORMAT.to_string(),
        }
    }
}

impl TechnicianProcessor {
    pub fn with_display_format(format: impl Into<String>) -> Result<Self, DisplayFormatError> {
        let display_format = format.into();
        if !is_valid_display_format(&display_format) {
            return Err(DisplayFormatError(display_format));
        }
        Ok(Self { display_format })
    }

    pub fn display_format(&self) -> &str {
        &self.display_format
    }

    /// One record per technician, in input order.
    pub fn process(
        &self,
        technicians: &[Technician],
        trips: &[Trip],
        reference: NaiveDate,
    ) -> Vec<ProcessedTechnician> {
        technicians
            .iter()
            .map(|technician| self.process_one(technician, trips, reference))
            .collect()
    }

    fn process_one(
        &self,
        technician: &Technician,
        trips: &[Trip],
        reference: NaiveDate,
    ) -> ProcessedTechnician {
        let last_trip = last_trip_date(&technician.id, trips);
        let days_since_last_trip =
            TripRecency::from_days(day_difference(Some(reference), last_trip));
        let last_trip_date_formatted = match last_trip {
            Some(date) => date.format(&self.display_format).to_string(),
            None => NEVER_TRAVELED_LABEL.to_string(),
        };

        ProcessedTechnician {
            technician: technician.clone(),
            availability: classify(&technician.original_status),
            days_since_last_trip,
            trips_this_year: trip_count_in_year(&technician.id, trips, reference),
            last_trip_date: last_trip,
            last_trip_date_formatted,
        }
    }
}

/// Processes with the default display format.
pub fn process(
    technicians: &[Technician],
    trips: &[Trip],
    reference: NaiveDate,
) -> Vec<ProcessedTechnician> {
    TechnicianProcessor::default().process(technicians, trips, reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::roster::domain::{Availability, TechnicianStatus};

    fn technician(id: &str, status: TechnicianStatus) -> Technician {
        Technician {
            id: id.to_string(),
            name: format!("Tech {id}"),
            profile: "Senior".to_string(),
            specialty: "Electrical".to_string(),
            home_base: "Joinville".to_string(),
            original_status: status,
        }
    }

    fn trip(technician_id: &str, date: &str) -> Trip {
        Trip {
            technician_id: technician_id.to_string(),
            date: date.to_string(),
            client: "Acme".to_string(),
            client_city: "Blumenau".to_string(),
            shift: Some("Day".to_string()),
        }
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 4).expect("valid date")
    }

    #[test]
    fn formats_last_trip_with_configured_pattern() {
        let technicians = vec![technician("t1", TechnicianStatus::Active)];
        let trips = vec![trip("t1", "2025-05-20")];

        let default = TechnicianProcessor::default().process(&technicians, &trips, reference());
        assert_eq!(default[0].last_trip_date_formatted, "20/05/2025");

        let iso = TechnicianProcessor::with_display_format("%Y-%m-%d")
            .expect("valid format")
            .process(&technicians, &trips, reference());
        assert_eq!(iso[0].last_trip_date_formatted, "2025-05-20");
    }

    #[test]
    fn rejects_unrenderable_display_format() {
        assert!(TechnicianProcessor::with_display_format("%Q").is_err());
        assert!(TechnicianProcessor::with_display_format("").is_err());
        assert!(TechnicianProcessor::with_display_format("%H:%M").is_err());
        assert!(is_valid_display_format("%d/%m/%Y"));
    }

    #[test]
    fn keeps_input_order_and_classifies_each_technician() {
        let technicians = vec![
            technician("t2", TechnicianStatus::OnLeave),
            technician("t1", TechnicianStatus::Active),
        ];
        let processed = process(&technicians, &[], reference());
        let ids: Vec<_> = processed.iter().map(|tech| tech.id()).collect();
        assert_eq!(ids, ["t2", "t1"]);
        assert_eq!(processed[0].availability, Availability::Unavailable);
        assert_eq!(processed[1].availability, Availability::Available);
        assert!(processed
            .iter()
            .all(|tech| tech.last_trip_date_formatted == NEVER_TRAVELED_LABEL));
    }
}
