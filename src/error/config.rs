//! Configuration error types.

use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {variable}: expected one of {expected}")]
    InvalidValue {
        variable: String,
        value: String,
        expected: String,
    },

    #[error("invalid log filter '{directive}': {message}")]
    InvalidLogFilter { directive: String, message: String },
}

impl ConfigError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::InvalidValue {
                variable, expected, ..
            } => format!("{} must be one of: {}", variable, expected),
            ConfigError::InvalidLogFilter { directive, .. } => {
                format!(
                    "CHIRP_LOG='{}' is not a valid filter (try CHIRP_LOG=debug).",
                    directive
                )
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidValue { .. } => "E_CFG_VALUE",
            ConfigError::InvalidLogFilter { .. } => "E_CFG_LOG_FILTER",
        }
    }
}
