//! Structured logging setup for the joinery CLI.
//!
//! Installs a global `tracing` subscriber writing to stderr, filtered by
//! `RUST_LOG`, and forwards records from the `log` facade into it.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt};

const LOG_FORMAT_ENV: &str = "JOINERY_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output encodings selectable through `JOINERY_LOG_FORMAT`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per event, including the active span list.
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Result<Self, LoggingError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }

    fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => Self::parse(&raw),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::NonUnicodeFormat {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }
}

/// Failure to set up logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `JOINERY_LOG_FORMAT` was set to bytes that are not UTF-8.
    #[error("`{name}` is not valid Unicode: {source}")]
    NonUnicodeFormat {
        /// Variable that was read.
        name: &'static str,
        /// Lookup error from `std::env`.
        #[source]
        source: env::VarError,
    },
    /// `JOINERY_LOG_FORMAT` named something other than `human` or `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Trimmed, lower-cased value that was rejected.
        provided: String,
    },
    /// Another global subscriber is already installed.
    #[error("a global tracing subscriber is already installed: {source}")]
    AlreadyInstalled {
        /// Rejection from `tracing`.
        #[source]
        source: SetGlobalDefaultError,
    },
}

/// Installs global structured logging once per process.
///
/// Output is human-readable by default; `JOINERY_LOG_FORMAT=json` switches to
/// JSON. The level comes from `RUST_LOG` and falls back to `info`. All
/// diagnostics go to stderr so the summaries on stdout stay clean.
///
/// Repeat calls after a successful install are no-ops.
///
/// # Errors
/// Returns [`LoggingError::NonUnicodeFormat`] or
/// [`LoggingError::UnsupportedFormat`] when `JOINERY_LOG_FORMAT` cannot be
/// used, and [`LoggingError::AlreadyInstalled`] when some other code owns the
/// global subscriber. Callers decide whether the last one is fatal.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let format = LogFormat::from_env()?;
    install_subscriber(format)?;
    INITIALISED.get_or_init(|| ());
    Ok(())
}

fn install_subscriber(format: LogFormat) -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| LoggingError::AlreadyInstalled { source })?;

    // The `log` bridge is optional; another logger may already hold it.
    if LogTracer::init().is_err() {
        tracing::debug!("log facade already bridged");
    }
    Ok(())
}
