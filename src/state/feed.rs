//! The feed store: the ordered list of posts and the active search query.
//!
//! `FeedStore` is the only owner of post data. Every mutation (compose,
//! like, retweet, reply) goes through one of its methods, and renderers read
//! the derived [`FeedStore::visible`] view.
//!
//! Randomness, ids and time are injected so the store is deterministic under
//! test:
//!
//! ```
//! use chirp::adapters::mock::FixedChooser;
//! use chirp::state::FeedStore;
//!
//! let mut store = FeedStore::seeded().with_chooser(Box::new(FixedChooser::always(1)));
//! let id = store.post("hello").unwrap();
//! assert_eq!(store.posts()[0].id, id);
//! assert_eq!(store.posts()[0].author.handle, "maya");
//! ```

use std::sync::Arc;

use crate::adapters::{RandomAuthorChooser, SequentialIds, SystemClock};
use crate::models::{Post, PostId, Profile, Reply, ReplyId};
use crate::seed;
use crate::traits::{AuthorChooser, Clock, IdGenerator};

pub struct FeedStore {
    /// Profile set new posts draw their author from
    profiles: Vec<Arc<Profile>>,
    /// Posts, newest first
    posts: Vec<Post>,
    /// Raw search query as typed
    query: String,
    chooser: Box<dyn AuthorChooser>,
    ids: Box<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for FeedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedStore")
            .field("profiles", &self.profiles.len())
            .field("posts", &self.posts.len())
            .field("query", &self.query)
            .finish()
    }
}

impl FeedStore {
    /// Create a store over the given profiles and posts.
    ///
    /// Defaults: random author choice, ids counting up from one past the
    /// largest id already present, and the system clock.
    pub fn new(profiles: Vec<Arc<Profile>>, posts: Vec<Post>) -> Self {
        let next_id = seed::max_seed_id(&posts) + 1;
        Self {
            profiles,
            posts,
            query: String::new(),
            chooser: Box::new(RandomAuthorChooser::new()),
            ids: Box::new(SequentialIds::starting_at(next_id)),
            clock: Arc::new(SystemClock),
        }
    }

    /// Create a store holding the seed profiles and posts, timed from now.
    pub fn seeded() -> Self {
        Self::seeded_with_clock(Arc::new(SystemClock))
    }

    /// Create a seeded store whose seed timestamps and clock come from `clock`.
    pub fn seeded_with_clock(clock: Arc<dyn Clock>) -> Self {
        let profiles = seed::default_profiles();
        let posts = seed::initial_posts(&profiles, clock.now());
        Self::new(profiles, posts).with_clock(clock)
    }

    /// Replace the author chooser.
    pub fn with_chooser(mut self, chooser: Box<dyn AuthorChooser>) -> Self {
        self.chooser = chooser;
        self
    }

    /// Replace the id generator.
    pub fn with_ids(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Publish a new post at the top of the feed.
    ///
    /// Blank content is ignored and returns `None`. The stored content is
    /// trimmed.
    pub fn post(&mut self, content: &str) -> Option<PostId> {
        let content = content.trim();
        if content.is_empty() || self.profiles.is_empty() {
            return None;
        }

        let index = self.chooser.choose(self.profiles.len()) % self.profiles.len();
        let author = Arc::clone(&self.profiles[index]);
        let id = PostId(self.ids.next_id());
        let post = Post::new(id, author, content, self.clock.now());

        tracing::info!(post_id = %id, author = %post.author.handle, "post published");
        self.posts.insert(0, post);
        Some(id)
    }

    /// Flip the like state of a post. Returns false if no post has `id`.
    pub fn toggle_like(&mut self, id: PostId) -> bool {
        match self.get_mut(id) {
            Some(post) => {
                post.toggle_like();
                tracing::debug!(post_id = %id, liked = post.liked, likes = post.likes, "like toggled");
                true
            }
            None => false,
        }
    }

    /// Count one more retweet. Returns false if no post has `id`.
    pub fn retweet(&mut self, id: PostId) -> bool {
        match self.get_mut(id) {
            Some(post) => {
                post.add_retweet();
                tracing::debug!(post_id = %id, retweets = post.retweets, "retweeted");
                true
            }
            None => false,
        }
    }

    /// Prepend a reply to a post.
    ///
    /// Blank text or an unknown post is ignored and returns `None`. The text
    /// is stored as given.
    pub fn reply(&mut self, id: PostId, text: &str) -> Option<ReplyId> {
        if text.trim().is_empty() {
            return None;
        }
        // Check existence before allocating so unknown ids burn no id
        self.get(id)?;
        let reply_id = ReplyId(self.ids.next_id());
        let post = self.get_mut(id)?;
        post.push_reply(Reply::new(reply_id, text));
        tracing::info!(post_id = %id, reply_id = %reply_id, "reply added");
        Some(reply_id)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Posts whose content or author name contains `query`, ignoring case.
    ///
    /// The query is trimmed first; a blank query returns the whole feed.
    /// Feed order is preserved.
    pub fn search(&self, query: &str) -> Vec<&Post> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.posts.iter().collect();
        }
        self.posts
            .iter()
            .filter(|p| p.matches_lowercase(&needle))
            .collect()
    }

    /// The feed filtered by the current query.
    pub fn visible(&self) -> Vec<&Post> {
        self.search(&self.query)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    /// All posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn profiles(&self) -> &[Arc<Profile>] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// The clock this store stamps posts with.
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }
}
