//! Color palettes for the dark and light themes.

use ratatui::style::{Color, Modifier, Style};

use crate::app::ThemeMode;

/// Every color the renderers draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Primary text
    pub text: Color,
    /// Handles, timestamps, placeholders
    pub muted: Color,
    /// Panel borders and separators
    pub border: Color,
    /// Active nav item, focused input border
    pub accent: Color,
    /// Background of filled buttons
    pub button_bg: Color,
    /// Text on filled buttons
    pub button_fg: Color,
    /// Selected post background
    pub selection: Color,
    /// Like count when liked
    pub liked: Color,
    /// Over-limit character counter
    pub error: Color,
    /// Dialog surface
    pub dialog_bg: Color,
    /// Text on the dialog surface
    pub dialog_text: Color,
    /// Dimmed screen behind a dialog
    pub backdrop: Color,
    /// Avatar initials
    pub avatar_text: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(0, 0, 0),
    text: Color::Rgb(243, 244, 246),
    muted: Color::Rgb(113, 113, 122),
    border: Color::Rgb(63, 63, 70),
    accent: Color::Rgb(29, 155, 240),
    button_bg: Color::Rgb(243, 244, 246),
    button_fg: Color::Rgb(0, 0, 0),
    selection: Color::Rgb(24, 24, 27),
    liked: Color::Rgb(248, 113, 113),
    error: Color::Rgb(239, 68, 68),
    dialog_bg: Color::Rgb(255, 255, 255),
    dialog_text: Color::Rgb(0, 0, 0),
    backdrop: Color::Rgb(38, 38, 38),
    avatar_text: Color::Rgb(255, 255, 255),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(255, 255, 255),
    text: Color::Rgb(17, 24, 39),
    muted: Color::Rgb(107, 114, 128),
    border: Color::Rgb(212, 212, 216),
    accent: Color::Rgb(29, 155, 240),
    button_bg: Color::Rgb(0, 0, 0),
    button_fg: Color::Rgb(255, 255, 255),
    selection: Color::Rgb(244, 244, 245),
    liked: Color::Rgb(220, 38, 38),
    error: Color::Rgb(220, 38, 38),
    dialog_bg: Color::Rgb(255, 255, 255),
    dialog_text: Color::Rgb(0, 0, 0),
    backdrop: Color::Rgb(115, 115, 115),
    avatar_text: Color::Rgb(255, 255, 255),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn bold(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Filled button, like the Tweet and Reply buttons.
    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.button_fg)
            .bg(self.button_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style applied on top of a button while the mouse is over it.
    pub fn hover(&self) -> Style {
        Style::default().add_modifier(Modifier::UNDERLINED)
    }
}
