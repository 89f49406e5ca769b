//! Post card rendering.
//!
//! ```text
//!  M  Maya Rao @maya · 3h
//!     Design is intelligence made visible. Sharing my top
//!     5 tips for clean UI.
//!     ↩ 0      ⇄ 3      ♡ 12
//! ────────────────────────────────────────────
//! ```

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{elapsed, Post};
use crate::ui::avatar::{avatar_spans, AVATAR_WIDTH};
use crate::ui::helpers::{display_width, row_count, truncate_with_ellipsis, wrap_text};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::Palette;

/// Columns before the content column (avatar plus a gap).
pub const CARD_INDENT: u16 = AVATAR_WIDTH + 1;
const ACTION_GAP: usize = 6;

/// A card laid out for a given width.
#[derive(Debug, Clone)]
pub struct CardLayout {
    pub lines: Vec<Line<'static>>,
    /// Row of the reply/retweet/like line within the card
    pub actions_row: u16,
    /// (action, column offset, width) for each action button
    pub actions: Vec<(ClickAction, u16, u16)>,
}

impl CardLayout {
    pub fn height(&self) -> u16 {
        row_count(self.lines.len())
    }
}

fn content_width(width: u16) -> usize {
    width.saturating_sub(CARD_INDENT + 1).max(1) as usize
}

/// Rows a card for `post` needs at `width`.
pub fn card_height(post: &Post, width: u16) -> u16 {
    // Header, content, actions, separator
    row_count(wrap_text(&post.content, content_width(width)).len()).saturating_add(3)
}

/// Lay out the card for `post`.
pub fn build_card(
    post: &Post,
    width: u16,
    now: DateTime<Utc>,
    palette: &Palette,
    selected: bool,
) -> CardLayout {
    let indent = " ".repeat(CARD_INDENT as usize);
    let muted = palette.muted_style();
    let mut lines = Vec::new();

    // Header: avatar, name, handle, age
    let meta = format!(" {} · {}", post.author.at_handle(), elapsed(post.timestamp, now));
    let name_room = (width as usize)
        .saturating_sub(CARD_INDENT as usize + display_width(&meta))
        .max(4);
    let mut header = avatar_spans(&post.author, palette.avatar_text);
    header.push(Span::raw(" "));
    header.push(Span::styled(
        truncate_with_ellipsis(&post.author.name, name_room),
        palette.bold(),
    ));
    header.push(Span::styled(meta, muted));
    lines.push(Line::from(header));

    for text in wrap_text(&post.content, content_width(width)) {
        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(text, Style::default().fg(palette.text)),
        ]));
    }

    // Actions
    let actions_row = row_count(lines.len());
    let (heart, like_style) = if post.liked {
        ("♥", Style::default().fg(palette.liked).add_modifier(Modifier::BOLD))
    } else {
        ("♡", muted)
    };
    let buttons = [
        (
            format!("↩ {}", post.reply_count()),
            muted,
            ClickAction::Reply(post.id),
        ),
        (
            format!("⇄ {}", post.retweets),
            muted,
            ClickAction::Retweet(post.id),
        ),
        (
            format!("{} {}", heart, post.likes),
            like_style,
            ClickAction::Like(post.id),
        ),
    ];

    let count = buttons.len();
    let mut spans = vec![Span::raw(indent)];
    let mut actions = Vec::with_capacity(count);
    let mut column = CARD_INDENT;
    for (i, (label, style, action)) in buttons.into_iter().enumerate() {
        let label_width = display_width(&label) as u16;
        actions.push((action, column, label_width));
        column += label_width;
        spans.push(Span::styled(label, style));
        if i + 1 < count {
            spans.push(Span::raw(" ".repeat(ACTION_GAP)));
            column += ACTION_GAP as u16;
        }
    }
    lines.push(Line::from(spans));

    lines.push(Line::from(Span::styled(
        "─".repeat(width as usize),
        palette.border_style(),
    )));

    if selected {
        let highlight = Style::default().bg(palette.selection);
        for line in lines.iter_mut().take(actions_row as usize + 1) {
            line.style = highlight;
        }
    }

    CardLayout {
        lines,
        actions_row,
        actions,
    }
}

/// Draw a card into `rect` (possibly shorter than the card) and register
/// its hit areas. `index` is the post's position in the filtered feed.
pub fn render_post_card(
    frame: &mut Frame,
    rect: Rect,
    card: CardLayout,
    index: usize,
    registry: &mut HitAreaRegistry,
    hover: Style,
) {
    registry.register(rect, ClickAction::SelectPost(index), None);

    if card.actions_row < rect.height {
        let y = rect.y + card.actions_row;
        for (action, offset, width) in &card.actions {
            let x = rect.x + offset;
            if x + width <= rect.x + rect.width {
                registry.register(Rect::new(x, y, *width, 1), action.clone(), Some(hover));
            }
        }
    }

    frame.render_widget(Paragraph::new(card.lines), rect);
}
