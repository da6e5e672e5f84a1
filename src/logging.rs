//! Logging configuration and initialization
//!
//! Diagnostics default to stderr so they never interleave with the demo
//! lines the binaries write to stdout.

use std::env;

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingSettings;
use crate::error::{DemoError, DemoResult};

/// Logging output format
#[derive(Debug, Clone)]
pub enum LogFormat {
    Human,
    Json,
}

/// Logging output destination
#[derive(Debug, Clone)]
pub enum LogOutput {
    Stdout,
    Stderr,
}

/// Resolved logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Level,
    pub format: LogFormat,
    pub output: LogOutput,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::Human,
            output: LogOutput::Stderr,
        }
    }
}

impl LoggingConfig {
    /// Resolve string-valued settings into a runtime configuration.
    pub fn from_settings(settings: &LoggingSettings) -> DemoResult<Self> {
        let level = settings.level.parse::<Level>().map_err(|_| {
            DemoError::Configuration {
                message: format!("Unknown log level: {}", settings.level),
                field: "logging.level".to_string(),
            }
        })?;

        let format = match settings.format.as_str() {
            "human" => LogFormat::Human,
            "json" => LogFormat::Json,
            other => {
                return Err(DemoError::Configuration {
                    message: format!("Unknown log format: {}", other),
                    field: "logging.format".to_string(),
                })
            }
        };

        let output = match settings.output.as_str() {
            "stdout" => LogOutput::Stdout,
            "stderr" => LogOutput::Stderr,
            other => {
                return Err(DemoError::Configuration {
                    message: format!("Unknown log output: {}", other),
                    field: "logging.output".to_string(),
                })
            }
        };

        Ok(Self { level, format, output })
    }
}

/// Initialize structured logging with the given configuration
pub fn init_logging(config: LoggingConfig) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Human => {
            let fmt_layer = fmt::layer().with_target(true);

            match config.output {
                LogOutput::Stdout => registry.with(fmt_layer.with_writer(std::io::stdout)).init(),
                LogOutput::Stderr => registry.with(fmt_layer.with_writer(std::io::stderr)).init(),
            }
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_span_events(fmt::format::FmtSpan::CLOSE);

            match config.output {
                LogOutput::Stdout => registry.with(fmt_layer.with_writer(std::io::stdout)).init(),
                LogOutput::Stderr => registry.with(fmt_layer.with_writer(std::io::stderr)).init(),
            }
        }
    }
}

/// Initialize logging with environment-based configuration
///
/// Reads `BASICS_LOG_LEVEL`, `BASICS_LOG_FORMAT`, and `BASICS_LOG_OUTPUT`;
/// unset variables fall back to the defaults. `RUST_LOG` still overrides
/// the filter at runtime.
pub fn init_from_env() -> DemoResult<()> {
    let defaults = LoggingSettings::default();

    let settings = LoggingSettings {
        level: env::var("BASICS_LOG_LEVEL").unwrap_or(defaults.level),
        format: env::var("BASICS_LOG_FORMAT").unwrap_or(defaults.format),
        output: env::var("BASICS_LOG_OUTPUT").unwrap_or(defaults.output),
    };

    init_logging(LoggingConfig::from_settings(&settings)?);
    Ok(())
}
