//! Configuration management for dbh
//!
//! Runtime settings are read from environment variables with sensible
//! defaults. Command-line flags take precedence over everything here.
//!
//! # Environment Variables
//!
//! - `DBH_LOG_LEVEL`: Logging level - default: "info"
//! - `DBH_LOG_JSON`: Emit JSON log lines (true|false) - default: "false"
//! - `DBH_FIXTURES_DIR`: Directory holding named fixture projects used with
//!   `--test-case` - default: "tests/fixtures"
//! - `DBH_DRY_RUN`: Report changes without writing them (true|false) - default: "false"
//!
//! # Example
//!
//! ```no_run
//! use dbh::DbhConfig;
//!
//! let config = DbhConfig::from_env().expect("Invalid environment");
//! config.validate().expect("Invalid configuration");
//! println!("{:?}", config);
//! ```

use std::env;
use std::path::PathBuf;
use thiserror::Error;

use crate::project::TestCase;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_FIXTURES_DIR: &str = "tests/fixtures";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbhConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Use JSON log output
    pub log_json: bool,

    /// Root of the named fixture projects
    pub fixtures_dir: PathBuf,

    /// Report without writing
    pub dry_run: bool,
}

impl Default for DbhConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
            fixtures_dir: PathBuf::from(DEFAULT_FIXTURES_DIR),
            dry_run: false,
        }
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(ConfigError::ParseError {
            field: field.to_string(),
            error: format!("expected true or false, got '{}'", other),
        }),
    }
}

impl DbhConfig {
    /// Loads configuration from `DBH_*` environment variables, falling back
    /// to defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for a set but malformed boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(level) = env::var("DBH_LOG_LEVEL") {
            config.log_level = level.to_lowercase();
        }
        if let Ok(value) = env::var("DBH_LOG_JSON") {
            config.log_json = parse_bool("DBH_LOG_JSON", &value)?;
        }
        if let Ok(dir) = env::var("DBH_FIXTURES_DIR") {
            config.fixtures_dir = PathBuf::from(dir);
        }
        if let Ok(value) = env::var("DBH_DRY_RUN") {
            config.dry_run = parse_bool("DBH_DRY_RUN", &value)?;
        }

        Ok(config)
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown log level or an empty fixtures dir
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        if self.fixtures_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Fixtures directory must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Named fixture project under the configured fixtures directory
    pub fn test_case(&self, name: &str) -> TestCase {
        TestCase::new(self.fixtures_dir.clone(), name)
    }
}
