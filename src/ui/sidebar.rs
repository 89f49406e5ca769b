//! Left sidebar: profile card, navigation, compose/theme buttons and the
//! "Who to follow" list.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, ThemeMode};
use crate::ui::avatar::{avatar_spans, AVATAR_WIDTH};
use crate::ui::components::Button;
use crate::ui::helpers::truncate_with_ellipsis;
use crate::ui::interaction::ClickAction;
use crate::ui::theme::Palette;

const NAV_ITEMS: [(&str, &str, bool); 3] = [
    ("⌂", "Profile", false),
    ("⌕", "Explore", true),
    ("✉", "Messages", false),
];

/// Glyph on the theme button: the mode a click switches to.
pub fn theme_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "☀",
        ThemeMode::Light => "☾",
    }
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    let inner = Rect::new(
        area.x + 1,
        area.y,
        area.width.saturating_sub(2),
        area.height,
    );
    if inner.width < 10 || inner.height == 0 {
        return;
    }
    let mut y = inner.y;

    y = render_profile_card(frame, inner, y, app, palette);
    y += 1;

    for (icon, label, active) in NAV_ITEMS {
        if y >= inner.bottom() {
            return;
        }
        let style = if active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        let line = Line::from(vec![
            Span::styled(format!(" {}  ", icon), style),
            Span::styled(label, style),
        ]);
        frame.render_widget(Paragraph::new(line), Rect::new(inner.x, y, inner.width, 1));
        y += 1;
    }
    y += 1;

    // Compose and theme buttons share a row
    let hover = palette.hover();
    let theme_button = Button::new(
        theme_icon(app.theme),
        Style::default().fg(palette.text).add_modifier(Modifier::REVERSED),
        ClickAction::ToggleTheme,
    );
    let compose_width = inner.width.saturating_sub(theme_button.width() + 1);
    let compose_label = format!("{:^width$}", "Compose", width = compose_width.saturating_sub(2) as usize);
    Button::new(&compose_label, palette.button(), ClickAction::OpenCompose).render(
        frame,
        inner.x,
        y,
        inner,
        &mut app.hit_registry,
        hover,
    );
    theme_button.render(
        frame,
        inner.x + compose_width + 1,
        y,
        inner,
        &mut app.hit_registry,
        hover,
    );
    y += 2;

    render_who_to_follow(frame, inner, y, app, palette);
}

/// Returns the row after the card.
fn render_profile_card(frame: &mut Frame, inner: Rect, y: u16, app: &App, palette: &Palette) -> u16 {
    let height = 4u16.min(inner.bottom().saturating_sub(y));
    let Some(viewer) = app.viewer() else {
        return y;
    };
    let rect = Rect::new(inner.x, y, inner.width, height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style());
    let name_room = inner.width.saturating_sub(AVATAR_WIDTH + 4) as usize;

    let mut first = avatar_spans(viewer, palette.avatar_text);
    first.push(Span::raw(" "));
    first.push(Span::styled(
        truncate_with_ellipsis(&viewer.name, name_room),
        palette.bold(),
    ));
    let second = Line::from(Span::styled(
        format!("{}{}", " ".repeat(AVATAR_WIDTH as usize + 1), viewer.at_handle()),
        palette.muted_style(),
    ));

    frame.render_widget(
        Paragraph::new(vec![Line::from(first), second]).block(block),
        rect,
    );
    y + height
}

fn render_who_to_follow(frame: &mut Frame, inner: Rect, mut y: u16, app: &mut App, palette: &Palette) {
    if y >= inner.bottom() {
        return;
    }
    frame.render_widget(
        Paragraph::new(Span::styled(" Who to follow", palette.bold())),
        Rect::new(inner.x, y, inner.width, 1),
    );
    y += 2;

    let hover = palette.hover();
    let suggestions = app.suggestions().to_vec();
    for profile in suggestions {
        if y + 1 >= inner.bottom() {
            break;
        }
        let following = app.follows.is_following(&profile.handle);
        let (label, style) = if following {
            ("Following", palette.button())
        } else {
            (
                "Follow",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let button = Button::new(label, style, ClickAction::ToggleFollow(profile.handle.clone()));
        let button_width = button.width();

        let name_room = inner
            .width
            .saturating_sub(AVATAR_WIDTH + 2 + button_width) as usize;
        let mut spans = avatar_spans(&profile, palette.avatar_text);
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            truncate_with_ellipsis(&profile.name, name_room),
            palette.bold(),
        ));
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(inner.x, y, inner.width, 1),
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("{}{}", " ".repeat(AVATAR_WIDTH as usize + 1), profile.at_handle()),
                palette.muted_style(),
            )),
            Rect::new(inner.x, y + 1, inner.width, 1),
        );

        button.render(
            frame,
            inner.right().saturating_sub(button_width),
            y,
            inner,
            &mut app.hit_registry,
            hover,
        );
        y += 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_icon_shows_target_mode() {
        assert_eq!(theme_icon(ThemeMode::Dark), "☀");
        assert_eq!(theme_icon(ThemeMode::Light), "☾");
    }
}
