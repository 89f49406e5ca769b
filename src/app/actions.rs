//! State-changing actions shared by key bindings and mouse clicks.

use crate::models::PostId;

use super::{App, Focus};

impl App {
    // ========================================================================
    // Reactions
    // ========================================================================

    pub fn like(&mut self, id: PostId) {
        if self.store.toggle_like(id) {
            self.mark_dirty();
        }
    }

    pub fn retweet(&mut self, id: PostId) {
        if self.store.retweet(id) {
            self.mark_dirty();
        }
    }

    pub fn like_selected(&mut self) {
        if let Some(id) = self.selected_post_id() {
            self.like(id);
        }
    }

    pub fn retweet_selected(&mut self) {
        if let Some(id) = self.selected_post_id() {
            self.retweet(id);
        }
    }

    // ========================================================================
    // Dialogs
    // ========================================================================

    /// Open the compose dialog unless another dialog is showing.
    pub fn open_compose(&mut self) {
        if self.reply.is_active() {
            return;
        }
        self.focus = Focus::Feed;
        self.compose.open();
        tracing::debug!("compose opened");
        self.mark_dirty();
    }

    pub fn submit_compose(&mut self) {
        if let Some(id) = self.compose.submit(&mut self.store) {
            // The new post is first in the feed
            self.selected = 0;
            self.feed_scroll = 0;
            self.clamp_selection();
            tracing::debug!(post_id = %id, "compose submitted");
        }
        self.mark_dirty();
    }

    /// Open the reply dialog for `id` unless a dialog is showing.
    pub fn open_reply(&mut self, id: PostId) {
        if self.has_dialog() {
            return;
        }
        let Some(post) = self.store.get(id) else {
            return;
        };
        self.reply.begin(post);
        self.focus = Focus::Feed;
        tracing::debug!(post_id = %id, "reply opened");
        self.mark_dirty();
    }

    pub fn reply_to_selected(&mut self) {
        if let Some(id) = self.selected_post_id() {
            self.open_reply(id);
        }
    }

    pub fn submit_reply(&mut self) {
        if let Some(id) = self.reply.submit(&mut self.store) {
            tracing::debug!(reply_id = %id, "reply submitted");
        }
        self.mark_dirty();
    }

    /// Close whichever dialog is open, discarding its draft.
    pub fn dismiss_dialog(&mut self) {
        if self.reply.is_active() {
            self.reply.dismiss();
            tracing::debug!("reply dismissed");
        } else if self.compose.is_open() {
            self.compose.cancel();
            tracing::debug!("compose cancelled");
        }
        self.mark_dirty();
    }

    // ========================================================================
    // Sidebar
    // ========================================================================

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = %self.theme, "theme toggled");
        self.mark_dirty();
    }

    pub fn toggle_follow(&mut self, handle: &str) {
        let following = self.follows.toggle(handle);
        tracing::debug!(handle, following, "follow toggled");
        self.mark_dirty();
    }

    /// Toggle the `n`-th (1-based) suggestion. Ignored while the sidebar is
    /// not on screen.
    pub fn toggle_follow_suggestion(&mut self, n: usize) {
        if !self.follows.is_mounted() || n == 0 {
            return;
        }
        let Some(handle) = self.suggestions().get(n - 1).map(|p| p.handle.clone()) else {
            return;
        };
        self.toggle_follow(&handle);
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub fn focus_search(&mut self) {
        if self.has_dialog() {
            return;
        }
        self.focus = Focus::Search;
        self.search.move_cursor_end();
        self.mark_dirty();
    }

    /// Return focus to the feed, keeping the query.
    pub fn blur_search(&mut self) {
        self.focus = Focus::Feed;
        self.mark_dirty();
    }

    /// Push the search box contents into the store and re-clamp the selection.
    pub fn sync_query(&mut self) {
        self.store.set_query(self.search.content());
        self.clamp_selection();
        tracing::trace!(query = self.search.content(), "query updated");
        self.mark_dirty();
    }

    pub fn clear_query(&mut self) {
        self.search.clear();
        self.sync_query();
    }
}
