//! Reply dialog state machine.
//!
//! Entering the flow captures a snapshot of the target post (author,
//! content and the replies known at that moment) so the dialog can show
//! them without holding a borrow of the store.

use std::sync::Arc;

use crate::models::{Post, PostId, Profile, Reply, ReplyId};
use crate::state::FeedStore;
use crate::widgets::DraftInput;

/// What the reply dialog shows about the post being replied to.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyTarget {
    pub post_id: PostId,
    pub author: Arc<Profile>,
    pub content: String,
    pub replies: Vec<Reply>,
}

impl From<&Post> for ReplyTarget {
    fn from(post: &Post) -> Self {
        Self {
            post_id: post.id,
            author: Arc::clone(&post.author),
            content: post.content.clone(),
            replies: post.replies.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ReplyFlow {
    #[default]
    Inactive,
    Active {
        target: ReplyTarget,
        draft: DraftInput,
    },
}

impl ReplyFlow {
    pub fn new() -> Self {
        Self::Inactive
    }

    /// Start replying to `post`, replacing any reply in progress.
    pub fn begin(&mut self, post: &Post) {
        *self = ReplyFlow::Active {
            target: ReplyTarget::from(post),
            draft: DraftInput::new(),
        };
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ReplyFlow::Active { .. })
    }

    pub fn target(&self) -> Option<&ReplyTarget> {
        match self {
            ReplyFlow::Active { target, .. } => Some(target),
            ReplyFlow::Inactive => None,
        }
    }

    pub fn draft(&self) -> Option<&DraftInput> {
        match self {
            ReplyFlow::Active { draft, .. } => Some(draft),
            ReplyFlow::Inactive => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut DraftInput> {
        match self {
            ReplyFlow::Active { draft, .. } => Some(draft),
            ReplyFlow::Inactive => None,
        }
    }

    /// Send the draft as a reply through `store`.
    ///
    /// The draft is cleared on every attempt. The dialog closes only when
    /// the store accepted the reply; a blank draft keeps it open.
    pub fn submit(&mut self, store: &mut FeedStore) -> Option<ReplyId> {
        let ReplyFlow::Active { target, draft } = self else {
            return None;
        };
        let text = draft.content().to_string();
        draft.clear();

        let reply_id = store.reply(target.post_id, &text)?;
        *self = ReplyFlow::Inactive;
        Some(reply_id)
    }

    /// Close the dialog, discarding the draft.
    pub fn dismiss(&mut self) {
        *self = ReplyFlow::Inactive;
    }
}
