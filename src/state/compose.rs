//! Compose dialog state machine.
//!
//! ```text
//!   Closed --open()--> Open(draft)
//!   Open --submit() [draft not blank]--> Closed   (post published)
//!   Open --submit() [draft blank]------> Open     (nothing happens)
//!   Open --cancel()--> Closed                     (draft discarded)
//! ```

use crate::models::PostId;
use crate::state::FeedStore;
use crate::widgets::DraftInput;

/// Character count past which the counter is drawn as over the limit.
/// Nothing is enforced.
pub const COMPOSE_SOFT_LIMIT: usize = 280;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ComposeFlow {
    #[default]
    Closed,
    Open { draft: DraftInput },
}

impl ComposeFlow {
    pub fn new() -> Self {
        Self::Closed
    }

    /// Open the dialog with an empty draft. Opening an open dialog keeps
    /// the draft.
    pub fn open(&mut self) {
        if matches!(self, ComposeFlow::Closed) {
            *self = ComposeFlow::Open {
                draft: DraftInput::new(),
            };
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ComposeFlow::Open { .. })
    }

    pub fn draft(&self) -> Option<&DraftInput> {
        match self {
            ComposeFlow::Open { draft } => Some(draft),
            ComposeFlow::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut DraftInput> {
        match self {
            ComposeFlow::Open { draft } => Some(draft),
            ComposeFlow::Closed => None,
        }
    }

    /// Characters in the draft, 0 when closed.
    pub fn char_count(&self) -> usize {
        self.draft().map(DraftInput::char_count).unwrap_or(0)
    }

    pub fn is_over_limit(&self) -> bool {
        self.char_count() > COMPOSE_SOFT_LIMIT
    }

    /// Publish the draft through `store`.
    ///
    /// A blank draft leaves the dialog open and untouched. On success the
    /// dialog closes and the new post's id is returned.
    pub fn submit(&mut self, store: &mut FeedStore) -> Option<PostId> {
        let draft = self.draft_mut()?;
        let id = store.post(draft.content())?;
        draft.clear();
        *self = ComposeFlow::Closed;
        Some(id)
    }

    /// Close the dialog, discarding the draft.
    pub fn cancel(&mut self) {
        *self = ComposeFlow::Closed;
    }
}
