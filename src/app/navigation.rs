//! Post selection within the filtered feed.

use crate::models::PostId;

use super::App;

impl App {
    /// Number of posts matching the current query.
    pub fn visible_len(&self) -> usize {
        self.store.visible().len()
    }

    /// Id of the selected post, if the filtered feed is non-empty.
    pub fn selected_post_id(&self) -> Option<PostId> {
        self.store.visible().get(self.selected).map(|p| p.id)
    }

    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Select the post at `index` in the filtered feed, clamped to range.
    pub fn select_post(&mut self, index: usize) {
        self.selected = index;
        self.clamp_selection();
    }

    /// Keep the selection inside the filtered feed after it shrinks.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_len();
        self.selected = self.selected.min(len.saturating_sub(1));
        self.feed_scroll = self.feed_scroll.min(self.selected);
    }
}
