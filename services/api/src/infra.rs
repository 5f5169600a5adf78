use chrono::{NaiveDate, Utc};
use crew_rotation::config::RosterDataFiles;
use crew_rotation::error::AppError;
use crew_rotation::workflows::import::RosterImporter;
use crew_rotation::workflows::roster::dates::{parse_calendar_date, utc_calendar_date};
use crew_rotation::workflows::roster::InMemoryRoster;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(raw).ok_or_else(|| format!("failed to parse '{raw}' as YYYY-MM-DD"))
}

pub(crate) fn today_or_now(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| utc_calendar_date(Utc::now()))
}

/// Roster for the HTTP service: configured CSV files, else the sample roster.
pub(crate) fn load_configured_roster(
    files: Option<&RosterDataFiles>,
) -> Result<InMemoryRoster, AppError> {
    match files {
        Some(files) => {
            info!(
                technicians = %files.technicians_csv.display(),
                trips = %files.trips_csv.display(),
                "loading roster from CSV"
            );
            Ok(RosterImporter::from_paths(
                &files.technicians_csv,
                &files.trips_csv,
            )?)
        }
        None => {
            info!("no roster files configured, serving the sample roster");
            Ok(InMemoryRoster::sample())
        }
    }
}

/// Roster for CLI commands. Returns whether CSV files were used.
pub(crate) fn load_roster_from_args(
    technicians: Option<PathBuf>,
    trips: Option<PathBuf>,
) -> Result<(InMemoryRoster, bool), AppError> {
    match (technicians, trips) {
        (Some(technicians), Some(trips)) => {
            let roster = RosterImporter::from_paths(technicians, trips)?;
            Ok((roster, true))
        }
        (None, None) => Ok((InMemoryRoster::sample(), false)),
        _ => Err(AppError::InvalidInput(
            "--technicians and --trips must be provided together".to_string(),
        )),
    }
}
