//! Result type alias for chirp operations.

use super::chirp_error::ChirpError;

/// Type alias for Results using ChirpError.
pub type ChirpResult<T> = Result<T, ChirpError>;
