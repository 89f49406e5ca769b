// Integration tests for the compose, reply, follow and search flows,
// driven through key events and clicks on the hit areas each frame
// registers.

mod common;

use chirp::app::Focus;
use chirp::models::PostId;
use chirp::ui::interaction::ClickAction;
use common::*;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

// =============================================================================
// Compose
// =============================================================================

#[test]
fn test_compose_by_key_publishes_and_selects() {
    let (mut app, _) = test_app();
    app.selected = 2;

    press(&mut app, KeyCode::Char('c'));
    assert!(app.compose.is_open());
    type_text(&mut app, "hello from the terminal");
    press(&mut app, KeyCode::Enter);

    assert!(!app.compose.is_open());
    assert_eq!(app.store.len(), 4);
    assert_eq!(app.store.posts()[0].content, "hello from the terminal");
    assert_eq!(app.store.posts()[0].author.handle, "maya");
    assert_eq!(app.selected, 0);
}

#[test]
fn test_blank_compose_stays_open() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(app.compose.is_open());
    assert_eq!(app.compose.draft().unwrap().content(), "   ");
    assert_eq!(app.store.len(), 3);
}

#[test]
fn test_compose_escape_discards_draft() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "never mind");
    press(&mut app, KeyCode::Esc);
    assert!(!app.compose.is_open());

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.compose.draft().unwrap().content(), "");
}

#[test]
fn test_compose_multiline_draft() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "one");
    app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));
    type_text(&mut app, "two");
    app.handle_key_event(ctrl('j'));
    type_text(&mut app, "three");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store.posts()[0].content, "one\ntwo\nthree");
}

#[test]
fn test_compose_by_clicks() {
    let (mut app, _) = test_app();
    render(&mut app, MEDIUM);
    click(&mut app, &ClickAction::OpenCompose);
    assert!(app.compose.is_open());

    app.handle_event(Event::Paste("pasted\r\npost".to_string()));
    render(&mut app, MEDIUM);
    click(&mut app, &ClickAction::SubmitCompose);

    assert!(!app.compose.is_open());
    assert_eq!(app.store.posts()[0].content, "pasted\npost");
}

#[test]
fn test_click_inside_dialog_does_not_dismiss() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('c'));
    render(&mut app, MEDIUM);

    click(&mut app, &ClickAction::DialogBody);
    assert!(app.compose.is_open());

    click(&mut app, &ClickAction::DismissDialog);
    assert!(!app.compose.is_open());
}

// =============================================================================
// Reply
// =============================================================================

#[test]
fn test_reply_by_key_prepends_and_closes() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.reply.target().unwrap().post_id, PostId(2));

    type_text(&mut app, "hi");
    press(&mut app, KeyCode::Enter);

    assert!(!app.reply.is_active());
    let post = app.store.get(PostId(2)).unwrap();
    assert_eq!(post.replies.len(), 2);
    assert_eq!(post.replies[0].text, "hi");
}

#[test]
fn test_blank_reply_clears_and_stays_open() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "  ");
    press(&mut app, KeyCode::Enter);

    assert!(app.reply.is_active());
    assert!(app.reply.draft().unwrap().is_empty());
    assert!(app.store.get(PostId(1)).unwrap().replies.is_empty());
}

#[test]
fn test_reply_button_on_card_opens_dialog() {
    let (mut app, _) = test_app();
    render(&mut app, STANDARD);
    click(&mut app, &ClickAction::Reply(PostId(3)));

    let target = app.reply.target().unwrap();
    assert_eq!(target.post_id, PostId(3));
    assert_eq!(target.author.handle, "neha");

    render(&mut app, STANDARD);
    type_text(&mut app, "nice tip");
    click(&mut app, &ClickAction::SubmitReply);
    assert_eq!(app.store.get(PostId(3)).unwrap().replies[0].text, "nice tip");
}

#[test]
fn test_compose_key_ignored_while_replying() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('r'));
    press(&mut app, KeyCode::Char('c'));
    assert!(!app.compose.is_open());
    // The keystroke went into the reply draft
    assert_eq!(app.reply.draft().unwrap().content(), "c");
}

// =============================================================================
// Reactions and selection
// =============================================================================

#[test]
fn test_like_and_retweet_clicks() {
    let (mut app, _) = test_app();
    render(&mut app, STANDARD);

    click(&mut app, &ClickAction::Like(PostId(1)));
    let post = app.store.get(PostId(1)).unwrap();
    assert!(post.liked);
    assert_eq!(post.likes, 13);

    render(&mut app, STANDARD);
    click(&mut app, &ClickAction::Retweet(PostId(1)));
    click(&mut app, &ClickAction::Retweet(PostId(1)));
    assert_eq!(app.store.get(PostId(1)).unwrap().retweets, 5);
}

#[test]
fn test_like_key_twice_restores() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('l'));
    let post = app.store.get(PostId(2)).unwrap();
    assert!(post.liked);
    assert_eq!(post.likes, 45);
}

#[test]
fn test_click_selects_card() {
    let (mut app, _) = test_app();
    render(&mut app, STANDARD);
    click(&mut app, &ClickAction::SelectPost(1));
    assert_eq!(app.selected, 1);
    assert_eq!(app.selected_post_id(), Some(PostId(2)));
}

// =============================================================================
// Follow toggles and theme
// =============================================================================

#[test]
fn test_follow_button_toggles() {
    let (mut app, _) = test_app();
    render(&mut app, MEDIUM);
    let follow = ClickAction::ToggleFollow("arjun".to_string());

    click(&mut app, &follow);
    assert!(app.follows.is_following("arjun"));
    render(&mut app, MEDIUM);
    click(&mut app, &follow);
    assert!(!app.follows.is_following("arjun"));
}

#[test]
fn test_follow_state_resets_when_sidebar_unmounts() {
    let (mut app, _) = test_app();
    render(&mut app, MEDIUM);
    press(&mut app, KeyCode::Char('1'));
    assert!(app.follows.is_following("maya"));

    render(&mut app, STANDARD);
    assert!(!app.follows.is_following("maya"));

    // Keys do nothing while the sidebar is hidden
    press(&mut app, KeyCode::Char('2'));
    assert!(!app.follows.is_following("arjun"));

    render(&mut app, MEDIUM);
    assert!(!app.follows.is_following("maya"));
}

#[test]
fn test_theme_toggles_by_key_and_click() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('T'));
    assert_eq!(app.theme.as_str(), "light");

    render(&mut app, MEDIUM);
    click(&mut app, &ClickAction::ToggleTheme);
    assert_eq!(app.theme.as_str(), "dark");
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_search_filters_live_and_keeps_query_on_blur() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.focus, Focus::Search);

    type_text(&mut app, "momentum");
    assert_eq!(app.visible_len(), 1);
    // Feed keys are plain text while searching
    assert!(!app.should_quit);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.focus, Focus::Feed);
    assert_eq!(app.store.query(), "momentum");
    assert_eq!(app.selected_post_id(), Some(PostId(3)));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.visible_len(), 3);
}

#[test]
fn test_search_box_click_focuses_and_other_click_blurs() {
    let (mut app, _) = test_app();
    render(&mut app, MEDIUM);
    click(&mut app, &ClickAction::FocusSearch);
    assert_eq!(app.focus, Focus::Search);

    app.handle_event(Event::Paste("ARJUN\nK".to_string()));
    assert_eq!(app.search.content(), "ARJUN K");
    assert_eq!(app.visible_len(), 1);

    render(&mut app, MEDIUM);
    click(&mut app, &ClickAction::SelectPost(0));
    assert_eq!(app.focus, Focus::Feed);
    assert_eq!(app.selected_post_id(), Some(PostId(2)));
}

// =============================================================================
// Quit
// =============================================================================

#[test]
fn test_quit_keys() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);

    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Char('c'));
    app.handle_key_event(ctrl('c'));
    assert!(app.should_quit);
}
