use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Where log lines go. Batch commands write reports to stdout, so their logs use stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
}

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter { directive: String, source: ParseError },
    AlreadyInitialized(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { directive, .. } => {
                write!(f, "log filter '{}' is not a valid EnvFilter directive", directive)
            }
            TelemetryError::AlreadyInitialized(err) => {
                write!(f, "log subscriber already installed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::AlreadyInitialized(err) => Some(&**err),
        }
    }
}

/// Pick the filter directive: a non-blank `RUST_LOG` value overrides `APP_LOG_LEVEL`.
pub(crate) fn build_filter(
    rust_log: Option<&str>,
    config: &TelemetryConfig,
) -> Result<EnvFilter, TelemetryError> {
    let directive = match rust_log.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => config.log_level.trim(),
    };

    EnvFilter::try_new(directive).map_err(|source| TelemetryError::InvalidFilter {
        directive: directive.to_string(),
        source,
    })
}

/// Install the global compact subscriber, writing to `output`.
pub fn init(config: &TelemetryConfig, output: LogOutput) -> Result<(), TelemetryError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let env_filter = build_filter(rust_log.as_deref(), config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false);

    let installed = match output {
        LogOutput::Stdout => builder.try_init(),
        LogOutput::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(TelemetryError::AlreadyInitialized)
}
