//! Responsive layout.
//!
//! `LayoutContext` wraps the terminal size and decides which columns are
//! shown and where they go. Render functions never read the terminal size
//! directly.

use ratatui::layout::Rect;

/// Terminal width breakpoints.
pub mod breakpoints {
    /// Below this the dialogs use nearly the full width
    pub const XS_WIDTH: u16 = 60;
    /// Below this dialogs take 80% of the width
    pub const SM_WIDTH: u16 = 80;
    /// The left sidebar is mounted at or above this width
    pub const SIDEBAR_WIDTH: u16 = 90;
    /// The right trends column is shown at or above this width
    pub const TRENDS_WIDTH: u16 = 120;
}

/// Fixed column widths.
pub const SIDEBAR_COLUMNS: u16 = 28;
pub const TRENDS_COLUMNS: u16 = 32;
/// Rows reserved for the key-hint footer.
pub const FOOTER_ROWS: u16 = 1;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRegions {
    pub sidebar: Option<Rect>,
    pub main: Rect,
    pub trends: Option<Rect>,
    pub footer: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `[min, max]`, never wider than the screen.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage)
            .clamp(min, max)
            .min(self.width)
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn shows_sidebar(&self) -> bool {
        self.width >= breakpoints::SIDEBAR_WIDTH
    }

    pub fn shows_trends(&self) -> bool {
        self.width >= breakpoints::TRENDS_WIDTH
    }

    /// Split `area` into sidebar, main column, trends column and footer.
    pub fn regions(&self, area: Rect) -> ScreenRegions {
        let footer_rows = FOOTER_ROWS.min(area.height);
        let body_height = area.height - footer_rows;
        let footer = Rect::new(area.x, area.y + body_height, area.width, footer_rows);

        let mut x = area.x;
        let mut remaining = area.width;

        let sidebar = self.shows_sidebar().then(|| {
            let rect = Rect::new(x, area.y, SIDEBAR_COLUMNS, body_height);
            x += SIDEBAR_COLUMNS;
            remaining -= SIDEBAR_COLUMNS;
            rect
        });

        let trends = self.shows_trends().then(|| {
            remaining -= TRENDS_COLUMNS;
            Rect::new(x + remaining, area.y, TRENDS_COLUMNS, body_height)
        });

        ScreenRegions {
            sidebar,
            main: Rect::new(x, area.y, remaining, body_height),
            trends,
            footer,
        }
    }
}
