//! Gradient avatars.
//!
//! An avatar is three cells wide: the first gradient color, the blended
//! midpoint under the initials, then the second color.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::models::Profile;

/// Width of an avatar in cells.
pub const AVATAR_WIDTH: u16 = 3;

const FALLBACK: Color = Color::Rgb(82, 82, 91);

/// Parse `#rrggbb` (the `#` is optional).
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn blend(a: (u8, u8, u8), b: (u8, u8, u8)) -> (u8, u8, u8) {
    let mid = |x: u8, y: u8| ((x as u16 + y as u16) / 2) as u8;
    (mid(a.0, b.0), mid(a.1, b.1), mid(a.2, b.2))
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// The three background colors of a profile's avatar.
pub fn gradient(profile: &Profile) -> [Color; 3] {
    match (parse_hex(&profile.colors[0]), parse_hex(&profile.colors[1])) {
        (Some(from), Some(to)) => [rgb(from), rgb(blend(from, to)), rgb(to)],
        (Some(from), None) => [rgb(from); 3],
        (None, Some(to)) => [rgb(to); 3],
        (None, None) => [FALLBACK; 3],
    }
}

/// Spans drawing the avatar for `profile`.
pub fn avatar_spans(profile: &Profile, text: Color) -> Vec<Span<'static>> {
    let [from, mid, to] = gradient(profile);
    let initial = profile.initials.chars().next().unwrap_or(' ');
    vec![
        Span::styled(" ", Style::default().bg(from)),
        Span::styled(
            initial.to_string(),
            Style::default()
                .fg(text)
                .bg(mid)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ", Style::default().bg(to)),
    ]
}
