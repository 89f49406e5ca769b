//! Key hints along the bottom row.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::ui::helpers::truncate_with_ellipsis;
use crate::ui::theme::Palette;

/// (key, description) pairs for the current state.
pub fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.has_dialog() {
        return vec![
            ("Enter", "send"),
            ("Alt+Enter", "newline"),
            ("Esc", "close"),
        ];
    }
    if app.focus == Focus::Search {
        return vec![("type", "filter"), ("Enter/Esc", "done")];
    }

    let mut hints = vec![
        ("j/k", "move"),
        ("l", "like"),
        ("t", "retweet"),
        ("r", "reply"),
        ("c", "compose"),
        ("/", "search"),
    ];
    if !app.search.is_empty() {
        hints.push(("Esc", "clear"));
    }
    if app.follows.is_mounted() {
        hints.push(("1-3", "follow"));
    }
    hints.push(("T", "theme"));
    hints.push(("q", "quit"));
    hints
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if area.height == 0 {
        return;
    }
    let text = hints(app)
        .into_iter()
        .map(|(key, what)| format!("{} {}", key, what))
        .collect::<Vec<_>>()
        .join(" · ");
    let text = truncate_with_ellipsis(&format!(" {}", text), area.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, palette.muted_style()))),
        area,
    );
}
