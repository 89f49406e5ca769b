use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Profile;

/// Identifier of a post, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

/// Identifier of a reply, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplyId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ReplyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reply attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reply {
    pub id: ReplyId,
    pub text: String,
}

impl Reply {
    pub fn new(id: ReplyId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// A post in the feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: PostId,
    /// Shared author profile
    pub author: Arc<Profile>,
    /// Plain text body (expected to stay within 280 characters, not enforced)
    pub content: String,
    /// Whether the viewer has liked this post
    pub liked: bool,
    pub likes: u32,
    pub retweets: u32,
    /// Replies, newest first
    pub replies: Vec<Reply>,
    /// Creation instant, serialized as RFC 3339
    pub timestamp: DateTime<Utc>,
}

impl Post {
    /// Create a fresh post with zeroed counters and no replies.
    pub fn new(
        id: PostId,
        author: Arc<Profile>,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author,
            content: content.into(),
            liked: false,
            likes: 0,
            retweets: 0,
            replies: Vec::new(),
            timestamp,
        }
    }

    /// Flip `liked` and move `likes` by one in the matching direction.
    ///
    /// `likes` saturates at zero so an inconsistent seed can never underflow.
    pub fn toggle_like(&mut self) {
        if self.liked {
            self.liked = false;
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.liked = true;
            self.likes = self.likes.saturating_add(1);
        }
    }

    pub fn add_retweet(&mut self) {
        self.retweets = self.retweets.saturating_add(1);
    }

    /// Prepend a reply (replies are kept newest first).
    pub fn push_reply(&mut self, reply: Reply) {
        self.replies.insert(0, reply);
    }

    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }

    /// Case-insensitive match of an already lowercased needle against the
    /// content and the author's display name.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.content.to_lowercase().contains(needle)
            || self.author.name.to_lowercase().contains(needle)
    }
}
