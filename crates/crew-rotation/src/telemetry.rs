use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    Filter { directive: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { directive, .. } => {
                write!(f, "invalid log filter '{}'", directive)
            }
            TelemetryError::Subscriber(err) => write!(f, "unable to install subscriber: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// `RUST_LOG` wins over the configured directive when it is set and valid.
fn build_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(directive).map_err(|source| TelemetryError::Filter {
        directive: directive.to_string(),
        source,
    })
}

/// Installs the global fmt subscriber for the HTTP service.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    install(&config.log_level)
}

/// CLI commands print their own output, so only warnings reach stderr by default.
pub fn init_for_cli() -> Result<(), TelemetryError> {
    install("warn")
}

fn install(directive: &str) -> Result<(), TelemetryError> {
    let env_filter = build_filter(directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
