//! Common test utilities for integration tests.
//!
//! Builds deterministic apps (fixed clock, fixed author choice) and drives
//! them through a `TestBackend` the same way the event loop does.

#![allow(dead_code)]

use std::sync::Arc;

use chirp::adapters::mock::{FixedChooser, ManualClock};
use chirp::app::App;
use chirp::startup::AppConfig;
use chirp::state::FeedStore;
use chirp::ui::{self, interaction::ClickAction};
use chrono::{DateTime, TimeZone, Utc};
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Standard terminal size
pub const STANDARD: (u16, u16) = (80, 30);
/// Wide enough for the sidebar, not for trends
pub const MEDIUM: (u16, u16) = (100, 36);
/// All three columns
pub const WIDE: (u16, u16) = (140, 40);

/// The instant every test clock starts at.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// A seeded store whose new posts are always written by profile `author`.
pub fn test_store(author: usize) -> (FeedStore, ManualClock) {
    let clock = ManualClock::new(fixed_now());
    let store = FeedStore::seeded_with_clock(Arc::new(clock.clone()))
        .with_chooser(Box::new(FixedChooser::always(author)));
    (store, clock)
}

/// A deterministic app in dark mode; new posts are written by Maya.
pub fn test_app() -> (App, ManualClock) {
    test_app_with_config(&AppConfig::default())
}

pub fn test_app_with_config(config: &AppConfig) -> (App, ManualClock) {
    let (store, clock) = test_store(1);
    (App::with_store(store, config), clock)
}

/// Render one frame and return the buffer.
pub fn render(app: &mut App, (width, height): (u16, u16)) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    app.needs_redraw = false;
    terminal.backend().buffer().clone()
}

/// Buffer contents, one line per row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

pub fn render_text(app: &mut App, size: (u16, u16)) -> String {
    buffer_text(&render(app, size))
}

/// Row of the first line containing `needle`.
pub fn find_row(text: &str, needle: &str) -> Option<usize> {
    text.lines().position(|line| line.contains(needle))
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(key(code));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Top-left cell of the last registered area with `action`.
pub fn hit_point(app: &App, action: &ClickAction) -> Option<(u16, u16)> {
    app.hit_registry
        .areas()
        .iter()
        .rev()
        .find(|a| &a.action == action)
        .map(|a| (a.rect.x, a.rect.y))
}

/// Click the area registered for `action` in the last rendered frame.
///
/// Panics if the frame did not register it.
pub fn click(app: &mut App, action: &ClickAction) {
    let (x, y) = hit_point(app, action)
        .unwrap_or_else(|| panic!("no hit area registered for {:?}", action));
    app.handle_mouse_event(left_click(x, y));
}

/// Cell position where `needle` starts, scanning cell by cell.
pub fn find_cell(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    let wanted: Vec<String> = needle.chars().map(|c| c.to_string()).collect();
    let area = buffer.area;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let fits = wanted.iter().enumerate().all(|(i, s)| {
                let cx = x + i as u16;
                cx < area.right() && buffer[(cx, y)].symbol() == s
            });
            if fits {
                return Some((x, y));
            }
        }
    }
    None
}
