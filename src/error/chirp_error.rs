//! Unified error type for the application.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::system::SystemError;
use super::ui::UiError;

/// Unified error type.
///
/// Feed operations never fail; everything here comes from the ambient
/// surface: the terminal, the log file and the environment.
#[derive(Debug)]
pub enum ChirpError {
    /// UI/terminal errors.
    Ui(UiError),

    /// System/filesystem errors.
    System(SystemError),

    /// Configuration errors.
    Config(ConfigError),
}

impl ChirpError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ChirpError::Ui(err) => {
                if err.is_recoverable() {
                    ErrorCategory::User
                } else {
                    ErrorCategory::System
                }
            }
            ChirpError::System(_) => ErrorCategory::System,
            ChirpError::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ChirpError::Ui(err) => err.user_message(),
            ChirpError::System(err) => err.user_message(),
            ChirpError::Config(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ChirpError::Ui(err) => err.error_code(),
            ChirpError::System(err) => err.error_code(),
            ChirpError::Config(err) => err.error_code(),
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    /// The text printed to stderr when startup fails.
    pub fn report(&self) -> String {
        format!(
            "chirp: {}\n  {}\n  hint: {}",
            self.user_message(),
            self,
            self.recovery_hint()
        )
    }
}

impl fmt::Display for ChirpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChirpError::Ui(err) => write!(f, "{}", err),
            ChirpError::System(err) => write!(f, "{}", err),
            ChirpError::Config(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ChirpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChirpError::Ui(err) => Some(err),
            ChirpError::System(err) => Some(err),
            ChirpError::Config(err) => Some(err),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<UiError> for ChirpError {
    fn from(err: UiError) -> Self {
        ChirpError::Ui(err)
    }
}

impl From<SystemError> for ChirpError {
    fn from(err: SystemError) -> Self {
        ChirpError::System(err)
    }
}

impl From<ConfigError> for ChirpError {
    fn from(err: ConfigError) -> Self {
        ChirpError::Config(err)
    }
}

impl From<std::io::Error> for ChirpError {
    fn from(err: std::io::Error) -> Self {
        use super::system::classify_io_error;
        ChirpError::System(classify_io_error(err, None, "I/O operation"))
    }
}
