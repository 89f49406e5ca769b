//! Data model for the feed: profiles, posts, replies and trends.

mod post;
mod profile;
mod text_utils;
mod trend;

pub use post::{Post, PostId, Reply, ReplyId};
pub use profile::Profile;
pub use text_utils::{elapsed, format_count};
pub use trend::Trend;
