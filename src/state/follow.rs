//! Cosmetic follow toggles for the "Who to follow" list.
//!
//! Purely visual state keyed by handle. It never touches the feed and is
//! forgotten whenever the sidebar that shows it is unmounted.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct FollowToggles {
    following: HashSet<String>,
    mounted: bool,
}

impl FollowToggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the follow state for `handle`, returning the new state.
    pub fn toggle(&mut self, handle: &str) -> bool {
        if self.following.remove(handle) {
            false
        } else {
            self.following.insert(handle.to_string());
            true
        }
    }

    pub fn is_following(&self, handle: &str) -> bool {
        self.following.contains(handle)
    }

    /// Record whether the sidebar was drawn this frame.
    ///
    /// Going from mounted to unmounted resets every toggle.
    pub fn set_mounted(&mut self, mounted: bool) {
        if self.mounted && !mounted {
            self.following.clear();
        }
        self.mounted = mounted;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}
