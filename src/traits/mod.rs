//! Trait abstractions for dependency injection and testability.
//!
//! The feed store never reaches for randomness, wall-clock time or id
//! allocation directly. Each is a capability injected at construction so
//! tests can substitute deterministic implementations.
//!
//! # Traits
//!
//! - [`AuthorChooser`] - Picks the author of a freshly composed post
//! - [`IdGenerator`] - Allocates post and reply identifiers
//! - [`Clock`] - Supplies "now" for timestamps and relative times

pub mod chooser;
pub mod clock;
pub mod ids;

pub use chooser::AuthorChooser;
pub use clock::Clock;
pub use ids::IdGenerator;
