//! Reusable input widgets.

pub mod draft_input;

pub use draft_input::DraftInput;
