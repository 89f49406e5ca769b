//! Clickable button spans.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::helpers::display_width;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};

/// A one-row button drawn as ` label ` and registered as a hit area.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    pub label: &'a str,
    pub style: Style,
    pub action: ClickAction,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, style: Style, action: ClickAction) -> Self {
        Self {
            label,
            style,
            action,
        }
    }

    /// Width including one cell of padding on each side.
    pub fn width(&self) -> u16 {
        display_width(self.label) as u16 + 2
    }

    /// Draw at (`x`, `y`), clipped to `bounds`. Returns the drawn rect.
    pub fn render(
        self,
        frame: &mut Frame,
        x: u16,
        y: u16,
        bounds: Rect,
        registry: &mut HitAreaRegistry,
        hover: Style,
    ) -> Rect {
        let right = bounds.x.saturating_add(bounds.width);
        let bottom = bounds.y.saturating_add(bounds.height);
        if y < bounds.y || y >= bottom || x >= right {
            return Rect::default();
        }
        let rect = Rect::new(x, y, self.width().min(right - x), 1);

        registry.register(rect, self.action, Some(hover));
        let style = match registry.hover_style(rect) {
            Some(hover) => self.style.patch(hover),
            None => self.style,
        };

        let line = Line::from(Span::styled(format!(" {} ", self.label), style));
        frame.render_widget(Paragraph::new(line), rect);
        rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_button_width_pads_label() {
        let button = Button::new("Tweet", Style::default(), ClickAction::SubmitCompose);
        assert_eq!(button.width(), 7);
    }

    #[test]
    fn test_button_registers_hit_area() {
        let mut terminal = Terminal::new(TestBackend::new(20, 2)).unwrap();
        let mut registry = HitAreaRegistry::new();
        terminal
            .draw(|f| {
                let bounds = f.area();
                Button::new("Tweet", Style::default(), ClickAction::SubmitCompose).render(
                    f,
                    2,
                    1,
                    bounds,
                    &mut registry,
                    Style::default(),
                );
            })
            .unwrap();

        assert_eq!(registry.hit_test(4, 1), Some(ClickAction::SubmitCompose));
        assert_eq!(registry.hit_test(4, 0), None);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(3, 1)].symbol(), "T");
    }

    #[test]
    fn test_button_outside_bounds_is_skipped() {
        let mut terminal = Terminal::new(TestBackend::new(10, 1)).unwrap();
        let mut registry = HitAreaRegistry::new();
        terminal
            .draw(|f| {
                let bounds = f.area();
                let rect = Button::new("Go", Style::default(), ClickAction::OpenCompose).render(
                    f,
                    0,
                    3,
                    bounds,
                    &mut registry,
                    Style::default(),
                );
                assert_eq!(rect, Rect::default());
            })
            .unwrap();
        assert!(registry.is_empty());
    }
}
