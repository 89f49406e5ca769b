//! Application state: the feed store and the small UI state machines
//! layered on top of it.

pub mod compose;
pub mod feed;
pub mod follow;
pub mod reply;

pub use compose::{ComposeFlow, COMPOSE_SOFT_LIMIT};
pub use feed::FeedStore;
pub use follow::FollowToggles;
pub use reply::{ReplyFlow, ReplyTarget};
