//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`FixedChooser`] - Deterministic author selection
//! - [`ManualClock`] - Clock advanced explicitly by the test

pub mod chooser;
pub mod clock;

pub use chooser::FixedChooser;
pub use clock::ManualClock;
