//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`RandomAuthorChooser`] - Uniformly random author via `rand`
//! - [`SequentialIds`] - Monotonic id counter
//! - [`SystemClock`] - Wall-clock time via `chrono`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides deterministic test doubles:
//! - [`mock::FixedChooser`] - Always (or cyclically) picks given indices
//! - [`mock::ManualClock`] - Clock that only moves when told to

pub mod mock;
pub mod random_chooser;
pub mod sequential_ids;
pub mod system_clock;

pub use mock::{FixedChooser, ManualClock};
pub use random_chooser::RandomAuthorChooser;
pub use sequential_ids::SequentialIds;
pub use system_clock::SystemClock;
