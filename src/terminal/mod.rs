//! Terminal lifecycle with RAII cleanup.
//!
//! `TerminalManager` puts the terminal in raw mode on the alternate screen
//! with mouse capture and bracketed paste, and puts everything back when it
//! is dropped, whether `main` returns normally or with an error.
//!
//! ```no_run
//! use chirp::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut term_manager = TerminalManager::new()?;
//!     let terminal = term_manager.terminal();
//!     // ... draw ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};

use crate::error::{ChirpResult, UiError};

/// Restores the terminal on drop. Owned by `TerminalManager`.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore the terminal now. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the TUI.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter TUI mode and clear the screen.
    ///
    /// If any step fails, the steps already taken are undone before the
    /// error is returned.
    pub fn new() -> ChirpResult<Self> {
        enable_raw_mode().map_err(init_failed)?;
        // From here on the guard undoes raw mode if anything fails
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout).map_err(init_failed)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(init_failed)?;
        terminal.clear().map_err(init_failed)?;

        tracing::debug!("terminal entered TUI mode");
        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Current terminal size.
    pub fn size(&self) -> ChirpResult<Rect> {
        let size = self.terminal.size().map_err(|e| UiError::InputError {
            message: e.to_string(),
        })?;
        Ok(size.into())
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> ChirpResult<()> {
        self.guard.cleanup();
        self.terminal
            .show_cursor()
            .map_err(|e| UiError::TerminalRestoreFailed {
                message: e.to_string(),
            })?;
        tracing::debug!("terminal restored");
        Ok(())
    }
}

fn init_failed(err: io::Error) -> UiError {
    UiError::TerminalInitFailed {
        message: err.to_string(),
    }
}
