//! Reusable UI components.

pub mod button;
pub mod dialog_frame;
pub mod draft_box;

pub use button::Button;
pub use dialog_frame::{calculate_dialog_width, render_dialog_frame, DialogFrameConfig};
pub use draft_box::{render_draft_box, DraftBoxStyle};
