//! Configuration types for svelte-mock.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Error;

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration, usually loaded from a YAML file next to the tests.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SvelteMockConfig {
    /// Matcher settings
    pub matchers: MatcherSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl SvelteMockConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: SvelteMockConfig =
            serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::Config(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }

        if self.matchers.hint_prefix.is_empty() {
            return Err(Error::Config(
                "matchers.hint_prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Matcher settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatcherSettings {
    /// Show full diffs instead of only the differing keys
    pub expand: bool,
    /// Receiver shown in matcher hints, e.g. `expect(received)`
    pub hint_prefix: String,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            expand: false,
            hint_prefix: "expect(received)".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
