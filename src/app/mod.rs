//! Application controller.
//!
//! `App` owns every piece of mutable state: the feed store, the two dialog
//! flows, follow toggles, the search draft, focus and theme. Event handlers
//! (`handlers`) and click actions (`ui::interaction`) mutate it; the renderer
//! reads it, writing back only frame bookkeeping: the hit registry, the
//! feed scroll offset, terminal size and whether the sidebar is mounted.

mod actions;
mod handlers;
mod navigation;
mod types;

pub use types::{Focus, ThemeMode};

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::{Profile, Trend};
use crate::seed;
use crate::startup::AppConfig;
use crate::state::{ComposeFlow, FeedStore, FollowToggles, ReplyFlow};
use crate::ui::interaction::HitAreaRegistry;
use crate::widgets::DraftInput;

pub struct App {
    /// Posts and the active query
    pub store: FeedStore,
    pub compose: ComposeFlow,
    pub reply: ReplyFlow,
    pub follows: FollowToggles,
    /// Search box contents; mirrored into `store` on every edit
    pub search: DraftInput,
    pub focus: Focus,
    pub theme: ThemeMode,
    pub trends: Vec<Trend>,
    /// Index of the selected post in the filtered feed
    pub selected: usize,
    /// Index of the first post drawn, kept by the feed renderer
    pub feed_scroll: usize,
    /// Clickable regions from the last frame
    pub hit_registry: HitAreaRegistry,
    /// Dirty flag: redraw on the next loop iteration
    pub needs_redraw: bool,
    pub should_quit: bool,
    pub tick_count: u64,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Unix second of the last frame, so relative times refresh once a second
    last_clock_second: i64,
}

impl App {
    /// Create an app over the seeded feed.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_store(FeedStore::seeded(), config)
    }

    /// Create an app over an existing store.
    pub fn with_store(store: FeedStore, config: &AppConfig) -> Self {
        let last_clock_second = store.clock().now().timestamp();
        Self {
            store,
            compose: ComposeFlow::new(),
            reply: ReplyFlow::new(),
            follows: FollowToggles::new(),
            search: DraftInput::new(),
            focus: Focus::Feed,
            theme: config.theme,
            trends: seed::trends(),
            selected: 0,
            feed_scroll: 0,
            hit_registry: HitAreaRegistry::new(),
            needs_redraw: true,
            should_quit: false,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
            last_clock_second,
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Called on every loop tick. Marks the UI dirty when the wall-clock
    /// second changes so "3h"-style labels stay current.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        let second = self.now().timestamp();
        if second != self.last_clock_second {
            self.last_clock_second = second;
            self.mark_dirty();
        }
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        if (width, height) != (self.terminal_width, self.terminal_height) {
            self.terminal_width = width;
            self.terminal_height = height;
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    /// Current time from the store's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.store.clock().now()
    }

    /// True while the compose or reply dialog is on screen.
    pub fn has_dialog(&self) -> bool {
        self.compose.is_open() || self.reply.is_active()
    }

    /// The viewer's own profile.
    pub fn viewer(&self) -> Option<&Arc<Profile>> {
        self.store.profiles().get(seed::VIEWER)
    }

    /// Profiles listed under "Who to follow": everyone but the viewer.
    pub fn suggestions(&self) -> &[Arc<Profile>] {
        let profiles = self.store.profiles();
        profiles.get(seed::VIEWER + 1..).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::ManualClock;
    use chrono::{Duration, TimeZone};

    fn app_with_clock() -> (App, ManualClock) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
        let store = FeedStore::seeded_with_clock(Arc::new(clock.clone()));
        (App::with_store(store, &AppConfig::default()), clock)
    }

    #[test]
    fn test_new_app_starts_dirty_on_feed() {
        let (app, _) = app_with_clock();
        assert!(app.needs_redraw);
        assert_eq!(app.focus, Focus::Feed);
        assert!(!app.has_dialog());
        assert_eq!(app.store.len(), 3);
        assert_eq!(app.trends.len(), 4);
    }

    #[test]
    fn test_theme_comes_from_config() {
        let config = AppConfig::default().with_theme(ThemeMode::Light);
        let app = App::with_store(FeedStore::seeded(), &config);
        assert_eq!(app.theme, ThemeMode::Light);
    }

    #[test]
    fn test_tick_marks_dirty_once_per_second() {
        let (mut app, clock) = app_with_clock();
        app.needs_redraw = false;

        app.tick();
        assert!(!app.needs_redraw);

        clock.advance(Duration::milliseconds(1500));
        app.tick();
        assert!(app.needs_redraw);

        app.needs_redraw = false;
        app.tick();
        assert!(!app.needs_redraw);
        assert_eq!(app.tick_count, 3);
    }

    #[test]
    fn test_suggestions_skip_viewer() {
        let (app, _) = app_with_clock();
        let handles: Vec<_> = app.suggestions().iter().map(|p| p.handle.as_str()).collect();
        assert_eq!(handles, vec!["maya", "arjun", "neha"]);
        assert_eq!(app.viewer().unwrap().handle, "you");
    }

    #[test]
    fn test_resize_marks_dirty() {
        let (mut app, _) = app_with_clock();
        app.needs_redraw = false;
        app.update_terminal_dimensions(132, 40);
        assert_eq!((app.terminal_width, app.terminal_height), (132, 40));
        assert!(app.needs_redraw);
    }
}
