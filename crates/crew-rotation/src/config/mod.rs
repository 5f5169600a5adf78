use crate::workflows::roster::processor::is_valid_display_format;
use crate::workflows::roster::{
    PriorityScorer, ScoringWeights, TechnicianProcessor, DEFAULT_DISPLAY_FORMAT,
    DEFAULT_SHORTLIST_SIZE,
};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub roster: RosterConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            roster: RosterConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Roster data files and prioritization knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterConfig {
    pub shortlist_size: usize,
    pub date_display_format: String,
    pub weights: ScoringWeights,
    pub data_files: Option<RosterDataFiles>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterDataFiles {
    pub technicians_csv: PathBuf,
    pub trips_csv: PathBuf,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            shortlist_size: DEFAULT_SHORTLIST_SIZE,
            date_display_format: DEFAULT_DISPLAY_FORMAT.to_string(),
            weights: ScoringWeights::default(),
            data_files: None,
        }
    }
}

impl RosterConfig {
    /// Roster settings alone, for commands that never bind a server.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    fn from_env() -> Result<Self, ConfigError> {
        let shortlist_size = match env::var("ROSTER_SHORTLIST_SIZE") {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::InvalidShortlistSize(raw)),
            },
            Err(_) => DEFAULT_SHORTLIST_SIZE,
        };

        let date_display_format =
            env::var("ROSTER_DATE_FORMAT").unwrap_or_else(|_| DEFAULT_DISPLAY_FORMAT.to_string());
        if !is_valid_display_format(&date_display_format) {
            return Err(ConfigError::InvalidDateFormat(date_display_format));
        }

        let data_files = match (
            env::var_os("ROSTER_TECHNICIANS_CSV"),
            env::var_os("ROSTER_TRIPS_CSV"),
        ) {
            (Some(technicians), Some(trips)) => Some(RosterDataFiles {
                technicians_csv: PathBuf::from(technicians),
                trips_csv: PathBuf::from(trips),
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteDataFiles),
        };

        let defaults = ScoringWeights::default();
        let weights = ScoringWeights {
            recency_per_day: weight_from_env(
                "ROSTER_WEIGHT_RECENCY_PER_DAY",
                defaults.recency_per_day,
            )?,
            profile_match: weight_from_env("ROSTER_WEIGHT_PROFILE_MATCH", defaults.profile_match)?,
            specialty_match: weight_from_env(
                "ROSTER_WEIGHT_SPECIALTY_MATCH",
                defaults.specialty_match,
            )?,
            trip_penalty: weight_from_env("ROSTER_WEIGHT_TRIP_PENALTY", defaults.trip_penalty)?,
        };

        Ok(Self {
            shortlist_size,
            date_display_format,
            weights,
            data_files,
        })
    }

    pub fn processor(&self) -> TechnicianProcessor {
        TechnicianProcessor::with_display_format(self.date_display_format.clone())
            .unwrap_or_default()
    }

    pub fn scorer(&self) -> PriorityScorer {
        PriorityScorer::new(self.weights.clone(), self.shortlist_size)
    }
}

/// Weights must be finite and non-negative; the trip penalty is subtracted.
fn weight_from_env(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    let raw = match env::var(key) {
        Ok(raw) => raw,
        Err(_) => return Ok(default),
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ConfigError::InvalidWeight { key, raw }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidShortlistSize(String),
    InvalidDateFormat(String),
    InvalidWeight { key: &'static str, raw: String },
    IncompleteDataFiles,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidShortlistSize(raw) => write!(
                f,
                "ROSTER_SHORTLIST_SIZE must be a positive integer, got '{}'",
                raw
            ),
            ConfigError::InvalidDateFormat(raw) => write!(
                f,
                "ROSTER_DATE_FORMAT '{}' cannot render a calendar date",
                raw
            ),
            ConfigError::InvalidWeight { key, raw } => write!(
                f,
                "{} must be a non-negative number, got '{}'",
                key, raw
            ),
            ConfigError::IncompleteDataFiles => write!(
                f,
                "ROSTER_TECHNICIANS_CSV and ROSTER_TRIPS_CSV must be set together"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidShortlistSize(_)
            | ConfigError::InvalidDateFormat(_)
            | ConfigError::InvalidWeight { .. }
            | ConfigError::IncompleteDataFiles => None,
        }
    }
}
