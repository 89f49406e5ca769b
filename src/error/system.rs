//! Filesystem errors.
//!
//! The only files chirp touches are its log directory and log file, so each
//! variant carries the path involved and the step that failed.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum SystemError {
    /// The OS refused access to `path`.
    PermissionDenied { path: PathBuf, operation: String },

    /// The log directory could not be created.
    DirectoryCreationFailed { path: PathBuf, message: String },

    /// Any other I/O failure.
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// No platform cache directory and no `CHIRP_LOG_FILE` override.
    NoCacheDirectory,
}

impl SystemError {
    pub fn user_message(&self) -> String {
        match self {
            SystemError::PermissionDenied { path, .. } => format!(
                "chirp is not allowed to write '{}'. Point CHIRP_LOG_FILE somewhere writable.",
                path.display()
            ),
            SystemError::DirectoryCreationFailed { path, .. } => format!(
                "Could not create the log directory '{}'.",
                path.display()
            ),
            SystemError::IoError {
                operation,
                path: Some(path),
                ..
            } => format!("Could not {} '{}'.", operation, path.display()),
            SystemError::IoError { operation, .. } => format!("Could not {}.", operation),
            SystemError::NoCacheDirectory => {
                "No cache directory on this system. Set CHIRP_LOG_FILE to choose a log path."
                    .to_string()
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::DirectoryCreationFailed { .. } => "E_SYS_DIR_CREATE",
            SystemError::IoError { .. } => "E_SYS_IO",
            SystemError::NoCacheDirectory => "E_SYS_NO_CACHE",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::PermissionDenied { path, operation } => {
                write!(f, "permission denied: {} {}", operation, path.display())
            }
            SystemError::DirectoryCreationFailed { path, message } => {
                write!(f, "mkdir {}: {}", path.display(), message)
            }
            SystemError::IoError {
                operation,
                path: Some(path),
                message,
            } => write!(f, "{} {}: {}", operation, path.display(), message),
            SystemError::IoError {
                operation, message, ..
            } => write!(f, "{}: {}", operation, message),
            SystemError::NoCacheDirectory => f.write_str("no cache directory"),
        }
    }
}

impl std::error::Error for SystemError {}

/// Map an `io::Error` from `operation` on `path` to a [`SystemError`].
///
/// Permission failures are only singled out when the path is known.
pub fn classify_io_error(err: io::Error, path: Option<PathBuf>, operation: &str) -> SystemError {
    let operation = operation.to_string();
    match path {
        Some(path) if err.kind() == io::ErrorKind::PermissionDenied => {
            SystemError::PermissionDenied { path, operation }
        }
        path => SystemError::IoError {
            operation,
            path,
            message: err.to_string(),
        },
    }
}
