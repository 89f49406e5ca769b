//! Unified error handling.
//!
//! Feed operations are infallible by construction (blank input and unknown
//! ids are silent no-ops), so errors only come from the ambient surface:
//!
//! | Source | Type | Category |
//! |--------|------|----------|
//! | Terminal setup/teardown, drawing | [`UiError`] | System / User |
//! | Log directory and file | [`SystemError`] | System |
//! | `CHIRP_*` environment values | [`ConfigError`] | Configuration |
//!
//! All of them convert into [`ChirpError`], and fallible functions return
//! [`ChirpResult`].

mod category;
mod chirp_error;
mod config;
mod result;
mod system;
mod ui;

pub use category::ErrorCategory;
pub use chirp_error::ChirpError;
pub use config::ConfigError;
pub use result::ChirpResult;
pub use system::{classify_io_error, SystemError};
pub use ui::UiError;
