//! Bordered text box showing a [`DraftInput`].

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::widgets::DraftInput;

/// How a draft box is drawn.
#[derive(Debug, Clone, Copy)]
pub struct DraftBoxStyle {
    pub text: Style,
    pub placeholder: Style,
    pub border: Style,
    pub focused_border: Style,
}

/// Draw `draft` inside a rounded box. Returns the box rect.
///
/// When the draft has more lines than fit, the view scrolls to the end so
/// the cursor stays visible while typing.
pub fn render_draft_box(
    frame: &mut Frame,
    rect: Rect,
    draft: &DraftInput,
    placeholder: &str,
    focused: bool,
    style: &DraftBoxStyle,
) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            style.focused_border
        } else {
            style.border
        });
    let inner = block.inner(rect);

    let lines = draft.to_lines(style.text, placeholder, style.placeholder, focused);
    let scroll = lines.len().saturating_sub(inner.height as usize) as u16;

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(style.text)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, rect);
    rect
}
