//! Click action dispatch.
//!
//! Translates a [`ClickAction`] from the hit registry into `App` calls.

use super::hit_area::ClickAction;
use crate::app::{App, Focus};

/// Handle a click on a registered hit area.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    // Clicking anywhere but the search box takes focus back to the feed
    if app.focus == Focus::Search && action != ClickAction::FocusSearch {
        app.blur_search();
    }

    match action {
        ClickAction::OpenCompose => {
            app.open_compose();
            tracing::debug!("Click: OpenCompose");
        }
        ClickAction::ToggleTheme => {
            app.toggle_theme();
            tracing::debug!(theme = %app.theme, "Click: ToggleTheme");
        }
        ClickAction::FocusSearch => {
            app.focus_search();
            tracing::debug!("Click: FocusSearch");
        }
        ClickAction::ToggleFollow(handle) => {
            app.toggle_follow(&handle);
            tracing::debug!(handle = %handle, "Click: ToggleFollow");
        }
        ClickAction::SelectPost(index) => {
            app.select_post(index);
            tracing::debug!(index, "Click: SelectPost");
        }
        ClickAction::Like(id) => {
            app.like(id);
            tracing::debug!(post_id = %id, "Click: Like");
        }
        ClickAction::Retweet(id) => {
            app.retweet(id);
            tracing::debug!(post_id = %id, "Click: Retweet");
        }
        ClickAction::Reply(id) => {
            app.open_reply(id);
            tracing::debug!(post_id = %id, "Click: Reply");
        }
        ClickAction::SubmitCompose => {
            app.submit_compose();
            tracing::debug!("Click: SubmitCompose");
        }
        ClickAction::SubmitReply => {
            app.submit_reply();
            tracing::debug!("Click: SubmitReply");
        }
        ClickAction::DismissDialog => {
            app.dismiss_dialog();
            tracing::debug!("Click: DismissDialog");
        }
        ClickAction::DialogBody => {}
    }
}
