use serde::{Deserialize, Serialize};

/// A user profile shown as a post author or a follow suggestion.
///
/// Profiles are created once at startup and shared as `Arc<Profile>`; posts
/// hold a reference to their author, never a copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Display name ("Maya Rao")
    pub name: String,
    /// Unique handle without the leading `@`
    pub handle: String,
    /// Initials rendered inside the avatar
    pub initials: String,
    /// Avatar gradient as a pair of `#rrggbb` colors
    pub colors: [String; 2],
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        handle: impl Into<String>,
        initials: impl Into<String>,
        colors: [&str; 2],
    ) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
            initials: initials.into(),
            colors: [colors[0].to_string(), colors[1].to_string()],
        }
    }

    /// Handle with the `@` prefix used for display.
    pub fn at_handle(&self) -> String {
        format!("@{}", self.handle)
    }
}
