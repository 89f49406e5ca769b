//! Runtime configuration read from the environment.

use std::path::PathBuf;

use crate::app::ThemeMode;
use crate::error::{ChirpResult, ConfigError, SystemError};

/// Initial theme (`dark` or `light`).
pub const ENV_THEME: &str = "CHIRP_THEME";
/// `EnvFilter` directive; logging is off when unset.
pub const ENV_LOG: &str = "CHIRP_LOG";
/// Log file path override.
pub const ENV_LOG_FILE: &str = "CHIRP_LOG_FILE";

/// Configuration for a TUI session.
///
/// ```
/// use chirp::app::ThemeMode;
/// use chirp::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_theme(ThemeMode::Light)
///     .with_log_filter("debug");
/// assert_eq!(config.log_filter.as_deref(), Some("debug"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Theme the UI starts in
    pub theme: ThemeMode,
    /// Tracing filter directive (None disables logging)
    pub log_filter: Option<String>,
    /// Where logs go (None means the default under the cache dir)
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Read `CHIRP_THEME`, `CHIRP_LOG` and `CHIRP_LOG_FILE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(theme) = get(ENV_THEME) {
            config.theme = theme.parse()?;
        }
        if let Some(filter) = get(ENV_LOG) {
            config.log_filter = Some(filter);
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            config.log_file = Some(PathBuf::from(path));
        }
        Ok(config)
    }

    /// The log file to write to: the override, or `<cache dir>/chirp/chirp.log`.
    pub fn log_path(&self) -> ChirpResult<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }
        let cache = dirs::cache_dir().ok_or(SystemError::NoCacheDirectory)?;
        Ok(cache.join("chirp").join("chirp.log"))
    }
}
