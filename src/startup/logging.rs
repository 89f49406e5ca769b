//! File logging setup.
//!
//! Stdout belongs to the TUI, so tracing output always goes to a file.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use super::config::AppConfig;
use crate::error::{classify_io_error, ChirpResult, ConfigError, SystemError};

/// Install the global tracing subscriber described by `config`.
///
/// Returns the log path when a subscriber was installed, `None` when
/// logging is disabled or a global subscriber already exists.
pub fn init_logging(config: &AppConfig) -> ChirpResult<Option<PathBuf>> {
    let Some(directive) = config.log_filter.as_deref() else {
        return Ok(None);
    };

    let filter = parse_filter(directive)?;
    let path = config.log_path()?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| SystemError::DirectoryCreationFailed {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| classify_io_error(e, Some(path.clone()), "open log file"))?;

    let installed = fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if !installed {
        return Ok(None);
    }

    tracing::info!(path = %path.display(), version = crate::cli::VERSION, "logging started");
    Ok(Some(path))
}

/// Parse a `CHIRP_LOG` directive into a filter.
pub fn parse_filter(directive: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(directive).map_err(|e| ConfigError::InvalidLogFilter {
        directive: directive.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_filter() {
        let config = AppConfig::default();
        assert_eq!(init_logging(&config).unwrap(), None);
    }

    #[test]
    fn test_parse_filter_accepts_directives() {
        assert!(parse_filter("debug").is_ok());
        assert!(parse_filter("chirp=trace,warn").is_ok());
    }

    #[test]
    fn test_parse_filter_rejects_garbage() {
        let err = parse_filter("chirp=notalevel").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFilter { .. }));
    }
}
