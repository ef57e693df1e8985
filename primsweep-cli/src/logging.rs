//! Logging initialisation for the primsweep CLI.
//!
//! Installs a global `tracing` subscriber writing to stderr, so the timing
//! report on stdout stays machine-readable, and bridges the `log` facade.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable selecting the diagnostic output format.
pub const LOG_FORMAT_ENV: &str = "PRIMSWEEP_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

static INITIALISED: OnceLock<LogFormat> = OnceLock::new();

/// Output format for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per event, including the span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `PRIMSWEEP_LOG_FORMAT` contained invalid UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `PRIMSWEEP_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Normalised value supplied by the user.
        provided: String,
    },
}

/// Install global structured logging if it has not already been configured.
///
/// The format is read from `PRIMSWEEP_LOG_FORMAT` (`human` or `json`,
/// default `human`) and the level filter from `RUST_LOG` (default `info`).
/// Returns the format in effect. When another subscriber already owns the
/// global slot it is left in place.
///
/// # Errors
/// Returns [`LoggingError`] if `PRIMSWEEP_LOG_FORMAT` is not valid Unicode or
/// names an unsupported format.
pub fn init_logging() -> Result<LogFormat, LoggingError> {
    if let Some(format) = INITIALISED.get() {
        return Ok(*format);
    }

    let format = format_from_env()?;
    install_subscriber(format);
    Ok(*INITIALISED.get_or_init(|| format))
}

fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
            name: LOG_FORMAT_ENV,
            source,
        }),
    }
}

fn install_subscriber(format: LogFormat) {
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

    let _ = LogTracer::init();

    if let Err(err) = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
    {
        tracing::debug!(error = %err, "keeping previously installed subscriber");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("HUMAN", LogFormat::Human)]
    #[case(" json ", LogFormat::Json)]
    fn parses_supported_formats(#[case] raw: &str, #[case] expected: LogFormat) {
        assert_eq!(raw.parse::<LogFormat>().expect("format must parse"), expected);
    }

    #[rstest]
    #[case("xml")]
    #[case("")]
    fn rejects_unknown_formats(#[case] raw: &str) {
        let err = raw.parse::<LogFormat>().expect_err("format must be rejected");
        match err {
            LoggingError::UnsupportedFormat { provided } => assert_eq!(provided, raw.trim()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn init_logging_is_idempotent() {
        let first = init_logging().expect("logging must initialise");
        let second = init_logging().expect("subsequent calls must be no-ops");
        assert_eq!(first, second);
    }
}
