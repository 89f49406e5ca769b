//! Mock data the application starts with.
//!
//! Everything here is built once at startup. Post timestamps are expressed
//! relative to the `now` passed in, so the feed always opens with posts
//! from "3h", "20h" and "2d" ago.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::models::{Post, PostId, Profile, Reply, ReplyId, Trend};

/// Index of the viewer's own profile in [`default_profiles`].
pub const VIEWER: usize = 0;

/// Index of the profile shown next to the "What's happening?" prompt.
pub const PROMPT_AVATAR: usize = 2;

/// The process-wide profile set, in display order.
pub fn default_profiles() -> Vec<Arc<Profile>> {
    vec![
        Arc::new(Profile::new("You", "you", "Y", ["#111827", "#374151"])),
        Arc::new(Profile::new("Maya Rao", "maya", "M", ["#0ea5a4", "#7c3aed"])),
        Arc::new(Profile::new("Arjun K.", "arjun", "A", ["#ef4444", "#f97316"])),
        Arc::new(Profile::new("Neha S.", "neha", "N", ["#10b981", "#06b6d4"])),
    ]
}

/// Seed posts, newest first.
///
/// Authors are taken from `profiles` by position, so the slice must be the
/// one returned by [`default_profiles`].
pub fn initial_posts(profiles: &[Arc<Profile>], now: DateTime<Utc>) -> Vec<Post> {
    let mut design = Post::new(
        PostId(1),
        Arc::clone(&profiles[1]),
        "Design is intelligence made visible. Sharing my top 5 tips for clean UI.",
        now - Duration::hours(3),
    );
    design.likes = 12;
    design.retweets = 3;

    let mut react = Post::new(
        PostId(2),
        Arc::clone(&profiles[2]),
        "Just finished a small React project: modern Twitter clone UI — love how Tailwind makes things fast.",
        now - Duration::hours(20),
    );
    react.liked = true;
    react.likes = 45;
    react.retweets = 8;
    react.replies = vec![Reply::new(ReplyId(21), "Share the repo plz")];

    let mut college = Post::new(
        PostId(3),
        Arc::clone(&profiles[3]),
        "College life hack: use small, consistent goals to build momentum. #StudentLife",
        now - Duration::hours(48),
    );
    college.likes = 3;

    vec![design, react, college]
}

/// Largest id used by [`initial_posts`], posts and replies alike.
pub fn max_seed_id(posts: &[Post]) -> u64 {
    posts
        .iter()
        .flat_map(|p| std::iter::once(p.id.0).chain(p.replies.iter().map(|r| r.id.0)))
        .max()
        .unwrap_or(0)
}

/// Static trends for the right column.
pub fn trends() -> Vec<Trend> {
    vec![
        Trend::new("#Design", 3456),
        Trend::new("#AI", 28900),
        Trend::new("#CollegeLife", 612),
        Trend::new("#OpenSource", 1200),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_profiles_have_unique_handles() {
        let profiles = default_profiles();
        let mut handles: Vec<_> = profiles.iter().map(|p| p.handle.clone()).collect();
        handles.sort();
        handles.dedup();
        assert_eq!(handles.len(), profiles.len());
        assert_eq!(profiles[VIEWER].name, "You");
    }

    #[test]
    fn test_seed_posts_share_author_profiles() {
        let profiles = default_profiles();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let posts = initial_posts(&profiles, now);
        assert_eq!(posts.len(), 3);
        assert!(Arc::ptr_eq(&posts[0].author, &profiles[1]));
        assert_eq!(posts[1].replies[0].text, "Share the repo plz");
        assert_eq!(posts[2].timestamp, now - Duration::hours(48));
    }

    #[test]
    fn test_max_seed_id_includes_replies() {
        let profiles = default_profiles();
        let posts = initial_posts(&profiles, Utc::now());
        assert_eq!(max_seed_id(&posts), 21);
        assert_eq!(max_seed_id(&[]), 0);
    }

    #[test]
    fn test_trends() {
        let t = trends();
        assert_eq!(t.len(), 4);
        assert_eq!(t[1].tag, "#AI");
        assert_eq!(t[1].post_count, 28900);
    }
}
