//! Reply dialog.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::state::ReplyTarget;
use crate::ui::avatar::{avatar_spans, AVATAR_WIDTH};
use crate::ui::components::{
    calculate_dialog_width, render_dialog_frame, render_draft_box, Button, DialogFrameConfig,
    DraftBoxStyle,
};
use crate::ui::helpers::{row_count, wrap_text};
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

pub const REPLY_PLACEHOLDER: &str = "Write a reply";
pub const NO_REPLIES: &str = "No replies yet";
const DRAFT_ROWS: u16 = 3;
const REPLY_MAX_WIDTH: u16 = 80;

/// Rows above the replies list: header, quoted post, draft, button, gap,
/// "Replies" title.
fn fixed_rows(quote_lines: u16) -> u16 {
    quote_lines.saturating_add(2 + DRAFT_ROWS + 4)
}

/// Wrapped lines of the replies list, newest first.
pub fn reply_lines(target: &ReplyTarget, width: usize) -> Vec<String> {
    if target.replies.is_empty() {
        return vec![NO_REPLIES.to_string()];
    }
    let mut lines = Vec::new();
    for reply in &target.replies {
        for (i, line) in wrap_text(&reply.text, width.saturating_sub(2)).into_iter().enumerate() {
            let bullet = if i == 0 { "• " } else { "  " };
            lines.push(format!("{}{}", bullet, line));
        }
    }
    lines
}

pub fn render_reply_dialog(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    app: &mut App,
    palette: &Palette,
) {
    let (Some(target), Some(draft)) = (app.reply.target(), app.reply.draft()) else {
        return;
    };

    // Measure at the width the frame will use
    let probe = DialogFrameConfig::new("Reply", 0).max_width(REPLY_MAX_WIDTH);
    let inner_width = calculate_dialog_width(ctx, &probe, area.width).saturating_sub(2);
    let text_width = inner_width.saturating_sub(AVATAR_WIDTH + 1);
    let quote = wrap_text(&target.content, text_width.saturating_sub(2) as usize);
    let replies = reply_lines(target, text_width as usize);

    let wanted = fixed_rows(row_count(quote.len())).saturating_add(row_count(replies.len()));
    let config = DialogFrameConfig::new("Reply", wanted.min(area.height.saturating_sub(2)))
        .max_width(REPLY_MAX_WIDTH);
    let inner = render_dialog_frame(frame, area, ctx, &config, palette, &mut app.hit_registry);
    if inner.height == 0 || inner.width <= AVATAR_WIDTH + 1 {
        return;
    }

    let surface = Style::default().fg(palette.dialog_text).bg(palette.dialog_bg);
    let muted = Style::default().fg(palette.muted).bg(palette.dialog_bg);
    let text_x = inner.x + AVATAR_WIDTH + 1;
    let text_width = inner.right() - text_x;
    let mut y = inner.y;

    let mut header = avatar_spans(&target.author, palette.avatar_text);
    header.push(Span::styled(
        format!("  Replying to {}", target.author.at_handle()),
        muted,
    ));
    frame.render_widget(
        Paragraph::new(Line::from(header)),
        Rect::new(inner.x, y, inner.width, 1),
    );
    y += 1;

    // Quoted post
    let quote_height = row_count(quote.len())
        .saturating_add(2)
        .min(inner.bottom().saturating_sub(y));
    let quote_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(muted);
    let quote_lines: Vec<Line> = quote
        .into_iter()
        .map(|l| Line::from(Span::styled(l, surface)))
        .collect();
    frame.render_widget(
        Paragraph::new(quote_lines).block(quote_block).style(surface),
        Rect::new(text_x, y, text_width, quote_height),
    );
    y += quote_height;

    let draft_height = DRAFT_ROWS.min(inner.bottom().saturating_sub(y));
    let style = DraftBoxStyle {
        text: surface,
        placeholder: muted,
        border: muted,
        focused_border: Style::default().fg(palette.accent).bg(palette.dialog_bg),
    };
    render_draft_box(
        frame,
        Rect::new(text_x, y, text_width, draft_height),
        draft,
        REPLY_PLACEHOLDER,
        true,
        &style,
    );
    y += draft_height;

    let button = Button::new("Reply", palette.button(), ClickAction::SubmitReply);
    let button_x = inner.right().saturating_sub(button.width());
    let replies_top = y + 2;
    button.render(frame, button_x, y, inner, &mut app.hit_registry, palette.hover());

    if replies_top >= inner.bottom() {
        return;
    }
    frame.render_widget(
        Paragraph::new(Span::styled("Replies", surface.add_modifier(Modifier::BOLD))),
        Rect::new(text_x, replies_top, text_width, 1),
    );

    let list_top = replies_top + 1;
    let list_style = if app.reply.target().is_some_and(|t| t.replies.is_empty()) {
        muted
    } else {
        surface
    };
    let list: Vec<Line> = replies
        .into_iter()
        .map(|l| Line::from(Span::styled(l, list_style)))
        .collect();
    frame.render_widget(
        Paragraph::new(list),
        Rect::new(
            text_x,
            list_top,
            text_width,
            inner.bottom().saturating_sub(list_top),
        ),
    );
}
