//! Terminal errors: setup, drawing, input and teardown.

use std::fmt;

#[derive(Debug, Clone)]
pub enum UiError {
    /// Raw mode, the alternate screen or the backend could not be set up.
    TerminalInitFailed { message: String },

    /// The terminal could not be put back the way it was.
    TerminalRestoreFailed { message: String },

    /// A frame could not be drawn.
    RenderFailed { message: String },

    /// Terminal events or size could not be read.
    InputError { message: String },
}

impl UiError {
    /// Whether the event loop can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, UiError::InputError { .. })
    }

    pub fn user_message(&self) -> String {
        match self {
            UiError::TerminalInitFailed { .. } => {
                "chirp needs an interactive terminal. Run it directly in a TTY.".to_string()
            }
            UiError::TerminalRestoreFailed { .. } => {
                "The terminal may be left in a raw state. Run `reset` to fix it.".to_string()
            }
            UiError::RenderFailed { .. } => "The screen could not be redrawn.".to_string(),
            UiError::InputError { .. } => "Terminal input could not be read.".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::TerminalInitFailed { .. } => "E_UI_TERM_INIT",
            UiError::TerminalRestoreFailed { .. } => "E_UI_TERM_RESTORE",
            UiError::RenderFailed { .. } => "E_UI_RENDER",
            UiError::InputError { .. } => "E_UI_INPUT",
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (what, message) = match self {
            UiError::TerminalInitFailed { message } => ("terminal setup failed", message),
            UiError::TerminalRestoreFailed { message } => ("terminal restore failed", message),
            UiError::RenderFailed { message } => ("draw failed", message),
            UiError::InputError { message } => ("input error", message),
        };
        write!(f, "{}: {}", what, message)
    }
}

impl std::error::Error for UiError {}
