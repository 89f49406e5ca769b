// Rendering tests on ratatui's TestBackend at the three layout widths.

mod common;

use chirp::models::PostId;
use chirp::ui::theme::Palette;
use chrono::Duration;
use common::*;
use crossterm::event::KeyCode;

// =============================================================================
// Feed column
// =============================================================================

#[test]
fn test_standard_frame_shows_header_prompt_and_seed_feed() {
    let (mut app, _) = test_app();
    let text = render_text(&mut app, STANDARD);

    assert!(text.contains("Explore"));
    assert!(text.contains("Search tweets or people"));
    assert!(text.contains("What's happening?"));
    assert!(text.contains("Maya Rao @maya · 3h"));
    assert!(text.contains("Arjun K. @arjun · 20h"));
    assert!(text.contains("Neha S. @neha · 2d"));
    assert!(text.contains("Design is intelligence made visible."));
}

#[test]
fn test_cards_appear_in_feed_order() {
    let (mut app, _) = test_app();
    let text = render_text(&mut app, STANDARD);
    let maya = find_row(&text, "@maya").unwrap();
    let arjun = find_row(&text, "@arjun").unwrap();
    let neha = find_row(&text, "@neha").unwrap();
    assert!(maya < arjun && arjun < neha);
}

#[test]
fn test_action_counts_and_liked_style() {
    let (mut app, _) = test_app();
    let buffer = render(&mut app, STANDARD);
    let text = buffer_text(&buffer);

    assert!(text.contains("↩ 0"));
    assert!(text.contains("⇄ 3"));
    assert!(text.contains("♡ 12"));
    // The seeded liked post uses the filled heart in the liked color
    assert!(text.contains("♥ 45"));

    let (x, y) = find_cell(&buffer, "♥ 45").unwrap();
    assert_eq!(buffer[(x, y)].fg, Palette::for_mode(app.theme).liked);
}

#[test]
fn test_relative_times_refresh_with_clock() {
    let (mut app, clock) = test_app();
    render(&mut app, STANDARD);
    assert!(!app.needs_redraw);

    app.tick();
    assert!(!app.needs_redraw);
    clock.advance(Duration::hours(2));
    app.tick();
    assert!(app.needs_redraw);

    let text = render_text(&mut app, STANDARD);
    assert!(text.contains("@maya · 5h"));
    assert!(text.contains("@arjun · 22h"));
}

#[test]
fn test_new_post_renders_on_top() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "fresh take");
    press(&mut app, KeyCode::Enter);

    let text = render_text(&mut app, STANDARD);
    let fresh = find_row(&text, "fresh take").unwrap();
    let design = find_row(&text, "Design is intelligence").unwrap();
    assert!(fresh < design);
    assert!(text.contains("@maya · 0s"));
}

#[test]
fn test_empty_search_result_message() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "zzz");
    let text = render_text(&mut app, STANDARD);
    assert!(text.contains("No posts match “zzz”"));
    assert!(!text.contains("@maya ·"));
}

#[test]
fn test_selection_scrolls_into_view_on_short_terminal() {
    let (mut app, _) = test_app();
    for i in 0..6 {
        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, &format!("filler post number {}", i));
        press(&mut app, KeyCode::Enter);
    }
    for _ in 0..8 {
        press(&mut app, KeyCode::Char('j'));
    }
    assert_eq!(app.selected_post_id(), Some(PostId(3)));

    let text = render_text(&mut app, (80, 16));
    assert!(text.contains("@neha"));
    assert!(app.feed_scroll > 0);
}

// =============================================================================
// Side columns
// =============================================================================

#[test]
fn test_standard_width_hides_side_columns() {
    let (mut app, _) = test_app();
    let text = render_text(&mut app, STANDARD);
    assert!(!text.contains("Who to follow"));
    assert!(!text.contains("Trends"));
}

#[test]
fn test_medium_width_shows_sidebar_only() {
    let (mut app, _) = test_app();
    let text = render_text(&mut app, MEDIUM);
    assert!(text.contains("Who to follow"));
    assert!(text.contains("Compose"));
    assert!(text.contains("Profile"));
    assert!(text.contains("Messages"));
    assert!(text.contains("@you"));
    assert!(!text.contains("Trends"));
}

#[test]
fn test_wide_width_shows_trends_and_tips() {
    let (mut app, _) = test_app();
    let text = render_text(&mut app, WIDE);
    assert!(text.contains("Who to follow"));
    assert!(text.contains("Trends"));
    assert!(text.contains("#AI"));
    assert!(text.contains("28,900 Tweets"));
    assert!(text.contains("Tips"));
}

#[test]
fn test_follow_label_flips() {
    let (mut app, _) = test_app();
    let text = render_text(&mut app, MEDIUM);
    assert!(!text.contains("Following"));

    press(&mut app, KeyCode::Char('2'));
    let text = render_text(&mut app, MEDIUM);
    assert_eq!(text.matches("Following").count(), 1);
}

#[test]
fn test_theme_icon_and_background_follow_mode() {
    let (mut app, _) = test_app();
    let buffer = render(&mut app, MEDIUM);
    assert!(buffer_text(&buffer).contains("☀"));
    assert_eq!(buffer[(0, 0)].bg, Palette::for_mode(app.theme).background);

    press(&mut app, KeyCode::Char('T'));
    let buffer = render(&mut app, MEDIUM);
    assert!(buffer_text(&buffer).contains("☾"));
    assert_eq!(buffer[(0, 0)].bg, Palette::for_mode(app.theme).background);
}

// =============================================================================
// Dialogs
// =============================================================================

#[test]
fn test_compose_dialog_contents() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('c'));
    let text = render_text(&mut app, MEDIUM);
    assert!(text.contains("Compose"));
    assert!(text.contains("0/280"));
    assert!(text.contains("Tweet"));

    type_text(&mut app, "héllo");
    let text = render_text(&mut app, MEDIUM);
    assert!(text.contains("héllo"));
    assert!(text.contains("5/280"));
}

#[test]
fn test_compose_counter_over_limit_uses_error_color() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('c'));
    app.handle_paste(&"x".repeat(300));
    let buffer = render(&mut app, MEDIUM);

    let (x, y) = find_cell(&buffer, "300/280").unwrap();
    assert_eq!(buffer[(x, y)].fg, Palette::for_mode(app.theme).error);
}

#[test]
fn test_reply_dialog_contents() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('r'));
    let text = render_text(&mut app, MEDIUM);

    assert!(text.contains("Replying to @arjun"));
    assert!(text.contains("Write a reply"));
    assert!(text.contains("Replies"));
    assert!(text.contains("• Share the repo plz"));
}

#[test]
fn test_reply_dialog_without_replies() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('r'));
    let text = render_text(&mut app, MEDIUM);
    assert!(text.contains("Replying to @maya"));
    assert!(text.contains("No replies yet"));
}

#[test]
fn test_footer_hints_follow_context() {
    let (mut app, _) = test_app();
    let text = render_text(&mut app, STANDARD);
    assert!(text.lines().last().unwrap().contains("like"));

    press(&mut app, KeyCode::Char('c'));
    let text = render_text(&mut app, STANDARD);
    assert!(text.lines().last().unwrap().contains("close"));
}
