//! Right column: trends and tips.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::{format_count, Trend};
use crate::ui::helpers::{display_width, row_count, wrap_text};
use crate::ui::theme::Palette;

pub const TIPS_TEXT: &str = "Press c or click Compose to create a tweet. \
Use l / t / r or the buttons on each tweet to like / retweet / reply.";

fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), palette.bold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style())
}

/// Two lines per trend: the tag with a `Follow` pill, then the count.
pub fn trend_lines(trends: &[Trend], width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let pill = " Follow ";
    let mut lines = Vec::new();
    for trend in trends {
        let gap = (width as usize)
            .saturating_sub(display_width(&trend.tag) + display_width(pill))
            .max(1);
        lines.push(Line::from(vec![
            Span::styled(trend.tag.clone(), palette.bold()),
            Span::raw(" ".repeat(gap)),
            Span::styled(pill, Style::default().fg(palette.text).bg(palette.selection)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("{} Tweets", format_count(trend.post_count)),
            palette.muted_style(),
        )));
    }
    lines
}

pub fn render_trends(frame: &mut Frame, area: Rect, trends: &[Trend], palette: &Palette) {
    if area.height < 3 || area.width < 12 {
        return;
    }
    let inner_width = area.width.saturating_sub(4);

    let trends_height = row_count(trends.len())
        .saturating_mul(2)
        .saturating_add(2)
        .min(area.height);
    let trends_rect = Rect::new(area.x + 1, area.y, area.width - 2, trends_height);
    frame.render_widget(
        Paragraph::new(trend_lines(trends, inner_width, palette)).block(panel("Trends", palette)),
        trends_rect,
    );

    let tips_top = trends_rect.bottom() + 1;
    let tips_height = row_count(wrap_text(TIPS_TEXT, inner_width as usize).len())
        .saturating_add(2)
        .min(area.bottom().saturating_sub(tips_top));
    if tips_height < 3 {
        return;
    }
    frame.render_widget(
        Paragraph::new(Span::styled(TIPS_TEXT, palette.muted_style()))
            .wrap(Wrap { trim: true })
            .block(panel("Tips", palette)),
        Rect::new(area.x + 1, tips_top, area.width - 2, tips_height),
    );
}
