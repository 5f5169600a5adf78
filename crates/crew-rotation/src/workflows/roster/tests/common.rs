use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::roster::domain::{Technician, TechnicianStatus, Trip};
use crate::workflows::roster::repository::{InMemoryRoster, RosterSource, SourceError};
use crate::workflows::roster::{PriorityScorer, RosterService, TechnicianProcessor};

pub(super) fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 4).expect("valid reference date")
}

pub(super) fn technician(id: &str, profile: &str, status: TechnicianStatus) -> Technician {
    Technician {
        id: id.to_string(),
        name: format!("Technician {id}"),
        profile: profile.to_string(),
        specialty: "Electrical".to_string(),
        home_base: "Joinville".to_string(),
        original_status: status,
    }
}

pub(super) fn trip(technician_id: &str, date: &str) -> Trip {
    Trip {
        technician_id: technician_id.to_string(),
        date: date.to_string(),
        client: "Refinaria Sul".to_string(),
        client_city: "Araucária".to_string(),
        shift: None,
    }
}

/// T1 traveled twice this year, T2 is on vacation, T3 never traveled.
pub(super) fn roster() -> (Vec<Technician>, Vec<Trip>) {
    let technicians = vec![
        technician("T1", "Senior", TechnicianStatus::Active),
        technician("T2", "Senior", TechnicianStatus::OnVacation),
        technician("T3", "Junior", TechnicianStatus::Active),
    ];
    let trips = vec![
        trip("T1", "2025-05-20"),
        trip("T1", "2025-03-10"),
        trip("T2", "2025-06-01"),
        trip("T1", "2025-13-40"),
    ];
    (technicians, trips)
}

pub(super) fn build_service() -> RosterService<InMemoryRoster> {
    let (technicians, trips) = roster();
    RosterService::new(
        Arc::new(InMemoryRoster::new(technicians, trips)),
        TechnicianProcessor::default(),
        PriorityScorer::default(),
    )
}

pub(super) struct UnavailableSource;

impl RosterSource for UnavailableSource {
    fn technicians(&self) -> Result<Vec<Technician>, SourceError> {
        Err(SourceError::Unavailable("roster offline".to_string()))
    }

    fn trips(&self) -> Result<Vec<Trip>, SourceError> {
        Err(SourceError::Unavailable("roster offline".to_string()))
    }
}

pub(super) fn unavailable_service() -> RosterService<UnavailableSource> {
    RosterService::new(
        Arc::new(UnavailableSource),
        TechnicianProcessor::default(),
        PriorityScorer::default(),
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
