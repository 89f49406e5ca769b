//! Main column: header with search, compose prompt and the post feed.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::seed;
use crate::ui::avatar::avatar_spans;
use crate::ui::components::{render_draft_box, DraftBoxStyle};
use crate::ui::interaction::ClickAction;
use crate::ui::post_card::{build_card, card_height, render_post_card};
use crate::ui::theme::Palette;

pub const HEADER_ROWS: u16 = 3;
pub const PROMPT_ROWS: u16 = 2;
const SEARCH_BOX_MAX: u16 = 34;
const SEARCH_BOX_MIN: u16 = 12;
pub const SEARCH_PLACEHOLDER: &str = "Search tweets or people";
pub const PROMPT_TEXT: &str = "What's happening?";

pub fn render_main(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    let header_rows = HEADER_ROWS.min(area.height);
    let header = Rect::new(area.x, area.y, area.width, header_rows);

    let prompt_rows = PROMPT_ROWS.min(area.height - header_rows);
    let prompt = Rect::new(area.x, header.bottom(), area.width, prompt_rows);

    let feed = Rect::new(
        area.x,
        prompt.bottom(),
        area.width,
        area.height - header_rows - prompt_rows,
    );

    render_header(frame, header, app, palette);
    render_prompt(frame, prompt, app, palette);
    render_feed(frame, feed, app, palette);
}

fn render_header(frame: &mut Frame, rect: Rect, app: &mut App, palette: &Palette) {
    if rect.height == 0 {
        return;
    }
    let title_row = Rect::new(rect.x, rect.y + rect.height / 2, rect.width, 1);
    let title = Line::from(vec![
        Span::styled(" ‹ ", palette.muted_style()),
        Span::styled("Explore", palette.bold()),
    ]);
    frame.render_widget(Paragraph::new(title), title_row);

    let box_width = SEARCH_BOX_MAX.min(rect.width.saturating_sub(14));
    if box_width < SEARCH_BOX_MIN || rect.height < HEADER_ROWS {
        return;
    }
    let search_rect = Rect::new(
        rect.x + rect.width - box_width - 1,
        rect.y,
        box_width,
        HEADER_ROWS,
    );
    let style = DraftBoxStyle {
        text: Style::default().fg(palette.text),
        placeholder: palette.muted_style(),
        border: palette.border_style(),
        focused_border: Style::default().fg(palette.accent),
    };
    render_draft_box(
        frame,
        search_rect,
        &app.search,
        SEARCH_PLACEHOLDER,
        app.focus == Focus::Search,
        &style,
    );
    app.hit_registry
        .register(search_rect, ClickAction::FocusSearch, None);
}

fn render_prompt(frame: &mut Frame, rect: Rect, app: &mut App, palette: &Palette) {
    if rect.height == 0 {
        return;
    }
    let row = Rect::new(rect.x, rect.y, rect.width, 1);
    app.hit_registry
        .register(row, ClickAction::OpenCompose, Some(palette.hover()));
    let hover = app.hit_registry.hover_style(row).unwrap_or_default();

    let mut spans = Vec::new();
    spans.push(Span::raw(" "));
    if let Some(profile) = app.store.profiles().get(seed::PROMPT_AVATAR) {
        spans.extend(avatar_spans(profile, palette.avatar_text));
    }
    spans.push(Span::styled(
        format!("  {}", PROMPT_TEXT),
        palette.muted_style().patch(hover),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), row);

    if rect.height > 1 {
        let separator = Rect::new(rect.x, rect.y + 1, rect.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "─".repeat(rect.width as usize),
                palette.border_style(),
            )),
            separator,
        );
    }
}

/// First card index to draw so that card `selected` is fully visible,
/// moving `scroll` as little as possible.
pub fn scroll_to_show(heights: &[u16], selected: usize, scroll: usize, viewport: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let selected = selected.min(heights.len() - 1);
    let mut scroll = scroll.min(selected);

    let span = |from: usize| -> u32 {
        heights[from..=selected].iter().map(|&h| h as u32).sum()
    };
    while scroll < selected && span(scroll) > viewport as u32 {
        scroll += 1;
    }
    scroll
}

fn render_feed(frame: &mut Frame, rect: Rect, app: &mut App, palette: &Palette) {
    if rect.height == 0 || rect.width == 0 {
        return;
    }
    let now = app.now();
    let width = rect.width;

    let cards = {
        let visible = app.store.visible();
        if visible.is_empty() {
            let message = format!(" No posts match \u{201c}{}\u{201d}", app.store.query().trim());
            frame.render_widget(
                Paragraph::new(Span::styled(
                    message,
                    palette.muted_style().add_modifier(Modifier::ITALIC),
                )),
                Rect::new(rect.x, rect.y + 1u16.min(rect.height - 1), rect.width, 1),
            );
            app.feed_scroll = 0;
            return;
        }

        let heights: Vec<u16> = visible.iter().map(|p| card_height(p, width)).collect();
        let scroll = scroll_to_show(&heights, app.selected, app.feed_scroll, rect.height);
        app.feed_scroll = scroll;

        let mut cards = Vec::new();
        let mut used = 0u16;
        for (index, post) in visible.iter().enumerate().skip(scroll) {
            if used >= rect.height {
                break;
            }
            let card = build_card(post, width, now, palette, index == app.selected);
            used = used.saturating_add(heights[index]);
            cards.push((index, card));
        }
        cards
    };

    let hover = palette.hover();
    let mut y = rect.y;
    for (index, card) in cards {
        let height = card.height().min(rect.bottom() - y);
        let card_rect = Rect::new(rect.x, y, width, height);
        render_post_card(frame, card_rect, card, index, &mut app.hit_registry, hover);
        y += height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_unchanged_when_selection_fits() {
        assert_eq!(scroll_to_show(&[5, 5, 5], 1, 0, 20), 0);
    }

    #[test]
    fn test_scroll_advances_to_reveal_selection() {
        assert_eq!(scroll_to_show(&[5, 5, 5, 5], 3, 0, 10), 2);
    }

    #[test]
    fn test_scroll_moves_back_up() {
        assert_eq!(scroll_to_show(&[5, 5, 5, 5], 0, 3, 10), 0);
    }

    #[test]
    fn test_tall_card_is_pinned_to_top() {
        assert_eq!(scroll_to_show(&[5, 30], 1, 0, 10), 1);
    }

    #[test]
    fn test_empty_feed() {
        assert_eq!(scroll_to_show(&[], 4, 2, 10), 0);
    }
}
