use crate::workflows::roster::domain::{Technician, TechnicianStatus, Trip};
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug, Deserialize)]
struct TechnicianRow {
    id: String,
    name: String,
    #[serde(default)]
    profile: String,
    #[serde(default)]
    specialty: String,
    #[serde(default)]
    home_base: String,
    status: String,
}

impl From<TechnicianRow> for Technician {
    fn from(row: TechnicianRow) -> Self {
        Technician {
            id: row.id,
            name: row.name,
            profile: row.profile,
            specialty: row.specialty,
            home_base: row.home_base,
            original_status: TechnicianStatus::from_label(&row.status),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TripRow {
    technician_id: String,
    date: String,
    #[serde(default)]
    client: String,
    #[serde(default)]
    client_city: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    shift: Option<String>,
}

impl From<TripRow> for Trip {
    fn from(row: TripRow) -> Self {
        Trip {
            technician_id: row.technician_id,
            date: row.date,
            client: row.client,
            client_city: row.client_city,
            shift: row.shift,
        }
    }
}

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source)
}

pub(crate) fn parse_technicians<R: Read>(source: R) -> Result<Vec<Technician>, csv::Error> {
    reader(source)
        .deserialize::<TechnicianRow>()
        .map(|row| row.map(Technician::from))
        .collect()
}

/// Trip dates are kept verbatim; malformed ones are skipped later by aggregation.
pub(crate) fn parse_trips<R: Read>(source: R) -> Result<Vec<Trip>, csv::Error> {
    reader(source)
        .deserialize::<TripRow>()
        .map(|row| row.map(Trip::from))
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
