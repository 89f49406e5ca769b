//! Startup: environment configuration and logging.
//!
//! - [`config`] - `AppConfig` read from `CHIRP_*` variables
//! - [`logging`] - file-backed tracing subscriber
//!
//! ```ignore
//! let config = AppConfig::from_env()?;
//! init_logging(&config)?;
//! ```

pub mod config;
pub mod logging;

pub use config::{AppConfig, ENV_LOG, ENV_LOG_FILE, ENV_THEME};
pub use logging::{init_logging, parse_filter};
