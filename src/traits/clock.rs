//! Time source abstraction.

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// Shared between the feed store (new post timestamps) and the renderers
/// (relative "3h" labels), hence `Sync`.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
