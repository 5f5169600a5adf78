use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Display literal used when a technician has no trip with a valid date.
pub const NEVER_TRAVELED_LABEL: &str = "Never traveled";

/// Administrative status as recorded by the roster owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TechnicianStatus {
    Active,
    OnVacation,
    OnLeave,
    Unrecognized(String),
}

impl TechnicianStatus {
    /// Accepts the canonical labels (`Active`, `OnVacation`, `OnLeave`) and
    /// their snake_case wire forms. Anything else is kept verbatim.
    pub fn from_label(value: &str) -> Self {
        match value {
            "Active" | "active" => Self::Active,
            "OnVacation" | "on_vacation" => Self::OnVacation,
            "OnLeave" | "on_leave" => Self::OnLeave,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::OnVacation => "On Vacation",
            Self::OnLeave => "On Leave",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for TechnicianStatus {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<TechnicianStatus> for String {
    fn from(value: TechnicianStatus) -> Self {
        match value {
            TechnicianStatus::Active => "active".to_string(),
            TechnicianStatus::OnVacation => "on_vacation".to_string(),
            TechnicianStatus::OnLeave => "on_leave".to_string(),
            TechnicianStatus::Unrecognized(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Unavailable => "Unavailable",
        }
    }
}

/// Field technician eligible for dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technician {
    pub id: String,
    pub name: String,
    pub profile: String,
    pub specialty: String,
    pub home_base: String,
    pub original_status: TechnicianStatus,
}

/// Historical dispatch record. `date` keeps the external `YYYY-MM-DD` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub technician_id: String,
    pub date: String,
    pub client: String,
    pub client_city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<String>,
}

/// Days elapsed since a technician's last trip.
///
/// `NeverTraveled` orders above every finite day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripRecency {
    Days(i64),
    NeverTraveled,
}

impl TripRecency {
    pub fn from_days(days: Option<i64>) -> Self {
        match days {
            Some(days) => Self::Days(days),
            None => Self::NeverTraveled,
        }
    }

    pub const fn days(self) -> Option<i64> {
        match self {
            Self::Days(days) => Some(days),
            Self::NeverTraveled => None,
        }
    }

    pub const fn is_never(self) -> bool {
        matches!(self, Self::NeverTraveled)
    }
}

impl Ord for TripRecency {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::NeverTraveled, Self::NeverTraveled) => Ordering::Equal,
            (Self::NeverTraveled, Self::Days(_)) => Ordering::Greater,
            (Self::Days(_), Self::NeverTraveled) => Ordering::Less,
            (Self::Days(a), Self::Days(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for TripRecency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TripRecency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(days) => write!(f, "{days} day(s)"),
            Self::NeverTraveled => f.write_str(NEVER_TRAVELED_LABEL),
        }
    }
}

/// Technician enriched with trip statistics for a given reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedTechnician {
    #[serde(flatten)]
    pub technician: Technician,
    pub availability: Availability,
    pub days_since_last_trip: TripRecency,
    pub trips_this_year: u32,
    pub last_trip_date: Option<NaiveDate>,
    pub last_trip_date_formatted: String,
}

impl ProcessedTechnician {
    pub fn id(&self) -> &str {
        &self.technician.id
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

/// Profile/specialty a dispatch asks for. Blank fields count as unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
}

impl Requirement {
    pub fn new(profile: Option<String>, specialty: Option<String>) -> Self {
        Self { profile, specialty }
    }

    pub fn profile(&self) -> Option<&str> {
        non_blank(self.profile.as_deref())
    }

    pub fn specialty(&self) -> Option<&str> {
        non_blank(self.specialty.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

/// How a requirement's profile/specialty is applied while ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Matches add score bonuses; non-matching technicians stay in the list.
    #[default]
    Bonus,
    /// Non-matching technicians are dropped before scoring.
    Filter,
}
