//! Mouse interaction: hit areas registered during rendering and the
//! dispatcher that turns clicks into `App` actions.

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
