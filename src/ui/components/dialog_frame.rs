//! Dialog Frame Component
//!
//! A centered dialog with rounded borders over a dimmed backdrop. Clicking
//! the backdrop dismisses the dialog; clicks on the dialog itself are
//! absorbed.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 40,
            max_width: 72,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Outer dialog width for `config` on a screen `area_width` columns wide
pub fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig, area_width: u16) -> u16 {
    let width = if ctx.is_extra_small() {
        area_width.saturating_sub(4).min(config.max_width)
    } else if ctx.is_narrow() {
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(60, config.min_width, config.max_width)
    };
    width.min(area_width.saturating_sub(2))
}

/// Dim `area`, draw a centered dialog and return its inner content area.
///
/// Registers [`ClickAction::DismissDialog`] over the whole area and
/// [`ClickAction::DialogBody`] over the dialog, so the dialog's own
/// buttons must be registered after this call.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
    palette: &Palette,
    registry: &mut HitAreaRegistry,
) -> Rect {
    frame.buffer_mut().set_style(
        area,
        Style::default()
            .bg(palette.backdrop)
            .add_modifier(Modifier::DIM),
    );
    registry.register(area, ClickAction::DismissDialog, None);

    let dialog_width = calculate_dialog_width(ctx, config, area.width);
    let dialog_height = calculate_total_dialog_height(config.content_height).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(dialog_width) / 2,
        y: area.y + area.height.saturating_sub(dialog_height) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let surface = Style::default().fg(palette.dialog_text).bg(palette.dialog_bg);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            surface.add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(surface)
        .style(surface);
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    registry.register(dialog_area, ClickAction::DialogBody, None);

    inner
}

/// Calculate the total dialog height needed for given content
pub fn calculate_total_dialog_height(content_height: u16) -> u16 {
    content_height + 2
}
