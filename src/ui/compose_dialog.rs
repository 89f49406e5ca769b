//! Compose dialog.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::state::COMPOSE_SOFT_LIMIT;
use crate::ui::avatar::{avatar_spans, AVATAR_WIDTH};
use crate::ui::components::{render_dialog_frame, render_draft_box, Button, DialogFrameConfig, DraftBoxStyle};
use crate::ui::helpers::display_width;
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

pub const COMPOSE_PLACEHOLDER: &str = "What's happening?";
const DRAFT_ROWS: u16 = 5;
const CONTENT_ROWS: u16 = DRAFT_ROWS + 2;

/// The `n/280` counter text.
pub fn counter_text(count: usize) -> String {
    format!("{}/{}", count, COMPOSE_SOFT_LIMIT)
}

pub fn render_compose_dialog(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    app: &mut App,
    palette: &Palette,
) {
    let Some(draft) = app.compose.draft() else {
        return;
    };
    let config = DialogFrameConfig::new("Compose", CONTENT_ROWS).min_width(44);
    let inner = render_dialog_frame(frame, area, ctx, &config, palette, &mut app.hit_registry);
    if inner.height == 0 || inner.width <= AVATAR_WIDTH + 1 {
        return;
    }

    let surface = Style::default().fg(palette.dialog_text).bg(palette.dialog_bg);
    let muted = Style::default().fg(palette.muted).bg(palette.dialog_bg);

    if let Some(viewer) = app.viewer() {
        frame.render_widget(
            Paragraph::new(Line::from(avatar_spans(viewer, palette.avatar_text))),
            Rect::new(inner.x, inner.y, AVATAR_WIDTH, 1),
        );
    }

    let text_x = inner.x + AVATAR_WIDTH + 1;
    let text_width = inner.right() - text_x;
    let draft_rect = Rect::new(text_x, inner.y, text_width, DRAFT_ROWS.min(inner.height));
    let style = DraftBoxStyle {
        text: surface,
        placeholder: muted,
        border: muted,
        focused_border: Style::default().fg(palette.accent).bg(palette.dialog_bg),
    };
    render_draft_box(frame, draft_rect, draft, COMPOSE_PLACEHOLDER, true, &style);

    let row = inner.y + DRAFT_ROWS + 1;
    if row >= inner.bottom() {
        return;
    }

    // Cosmetic media and more buttons
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" ✎ ", muted),
            Span::styled(" ", surface),
            Span::styled(" ⋯ ", muted),
        ])),
        Rect::new(text_x, row, text_width.min(7), 1),
    );

    let counter = counter_text(app.compose.char_count());
    let counter_style = if app.compose.is_over_limit() {
        Style::default()
            .fg(palette.error)
            .bg(palette.dialog_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        muted
    };

    let button = Button::new("Tweet", palette.button(), ClickAction::SubmitCompose);
    let button_x = inner.right().saturating_sub(button.width());
    let counter_width = display_width(&counter) as u16;
    let counter_x = button_x.saturating_sub(counter_width + 2);
    if counter_x > text_x + 7 {
        frame.render_widget(
            Paragraph::new(Span::styled(counter, counter_style)),
            Rect::new(counter_x, row, counter_width, 1),
        );
    }
    button.render(frame, button_x, row, inner, &mut app.hit_registry, palette.hover());
}
