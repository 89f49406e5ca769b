use serde::{Deserialize, Serialize};

/// A trending tag shown in the right column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trend {
    /// Tag including the leading `#`
    pub tag: String,
    /// Number of posts using the tag
    pub post_count: u64,
}

impl Trend {
    pub fn new(tag: impl Into<String>, post_count: u64) -> Self {
        Self {
            tag: tag.into(),
            post_count,
        }
    }
}
