//! UI rendering for the chirp feed.
//!
//! One full frame is drawn per redraw: the hit registry is cleared first and
//! every clickable element re-registers itself as it draws, so mouse input
//! always resolves against the frame currently on screen.
//!
//! ## Responsive Layout
//!
//! [`LayoutContext`] decides which columns are mounted:
//!
//! - `< 90` columns: feed only
//! - `>= 90`: profile sidebar on the left
//! - `>= 120`: trends and tips on the right
//!
//! Dialogs draw last, above everything else.

pub mod avatar;
pub mod components;
pub mod compose_dialog;
pub mod feed;
pub mod footer;
pub mod helpers;
pub mod interaction;
pub mod layout;
pub mod post_card;
pub mod reply_dialog;
pub mod sidebar;
pub mod theme;
pub mod trends;

pub use layout::{LayoutContext, ScreenRegions};
pub use theme::Palette;

use ratatui::{widgets::Block, Frame};

use crate::app::App;

/// Render one frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_registry.clear();

    let area = frame.area();
    app.update_terminal_dimensions(area.width, area.height);
    let ctx = LayoutContext::from_rect(area);
    let regions = ctx.regions(area);
    let palette = Palette::for_mode(app.theme);

    // Follow toggles only live while the sidebar is on screen
    app.follows.set_mounted(regions.sidebar.is_some());

    frame.render_widget(Block::default().style(palette.base()), area);

    if let Some(sidebar) = regions.sidebar {
        sidebar::render_sidebar(frame, sidebar, app, palette);
    }
    feed::render_main(frame, regions.main, app, palette);
    if let Some(column) = regions.trends {
        trends::render_trends(frame, column, &app.trends, palette);
    }
    footer::render_footer(frame, regions.footer, app, palette);

    if app.compose.is_open() {
        compose_dialog::render_compose_dialog(frame, area, &ctx, app, palette);
    } else if app.reply.is_active() {
        reply_dialog::render_reply_dialog(frame, area, &ctx, app, palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::startup::AppConfig;
    use crate::ui::interaction::ClickAction;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_narrow_frame_hides_side_columns() {
        let mut app = App::new(&AppConfig::default());
        let text = draw(&mut app, 80, 30);
        assert!(text.contains("Explore"));
        assert!(!text.contains("Who to follow"));
        assert!(!app.follows.is_mounted());
    }

    #[test]
    fn test_wide_frame_mounts_sidebar_and_trends() {
        let mut app = App::new(&AppConfig::default());
        let text = draw(&mut app, 140, 40);
        assert!(text.contains("Who to follow"));
        assert!(text.contains("Trends"));
        assert!(app.follows.is_mounted());
        assert_eq!(app.terminal_width, 140);
    }

    #[test]
    fn test_dialog_registers_above_feed() {
        let mut app = App::new(&AppConfig::default());
        app.open_compose();
        draw(&mut app, 100, 30);
        // Corner of the screen is backdrop, not a feed element
        assert_eq!(
            app.hit_registry.hit_test(0, 0),
            Some(ClickAction::DismissDialog)
        );
        assert!(app
            .hit_registry
            .areas()
            .iter()
            .any(|a| a.action == ClickAction::SubmitCompose));
    }

    #[test]
    fn test_tiny_frame_does_not_panic() {
        let mut app = App::new(&AppConfig::default());
        draw(&mut app, 10, 3);
        app.open_reply(crate::models::PostId(1));
        draw(&mut app, 10, 3);
    }
}
