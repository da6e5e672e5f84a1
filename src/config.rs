//! Configuration management for the demo binaries
//!
//! Demo output is fixed by contract, so configuration covers diagnostics
//! only: where log lines go, how verbose they are, and how they are
//! formatted.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{DemoError, DemoResult};

/// Top-level configuration for the demo binaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Diagnostic logging settings
    pub logging: LoggingSettings,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            logging: LoggingSettings::default(),
        }
    }
}

/// Logging-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level: "error", "warn", "info", "debug", or "trace"
    pub level: String,
    /// Output format: "human" or "json"
    pub format: String,
    /// Destination stream: "stderr" or "stdout"
    pub output: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "human".to_string(),
            // Demo lines own stdout; diagnostics stay on stderr
            output: "stderr".to_string(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> DemoResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DemoError::Configuration {
                message: format!("Failed to read config file: {}", e),
                field: "config_file".to_string(),
            }
        })?;

        let config: DemoConfig = toml::from_str(&content).map_err(|e| {
            DemoError::Configuration {
                message: format!("Failed to parse config file: {}", e),
                field: "config_format".to_string(),
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> DemoResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            DemoError::Configuration {
                message: format!("Failed to serialize config: {}", e),
                field: "config_serialization".to_string(),
            }
        })?;

        fs::write(path, content).map_err(|e| {
            DemoError::Configuration {
                message: format!("Failed to write config file: {}", e),
                field: "config_write".to_string(),
            }
        })?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> DemoResult<()> {
        // Resolving the settings into a runtime logging configuration
        // performs the full field validation.
        crate::logging::LoggingConfig::from_settings(&self.logging).map(|_| ())
    }
}
