//! Command-line interface.
//!
//! Called early in `main()` to handle flags before the TUI starts:
//!
//! ```ignore
//! let command = chirp::cli::parse_args(std::env::args());
//! if chirp::cli::run_cli_command(command) {
//!     return Ok(());
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, usage, CliCommand};
pub use version::{version_line, VERSION};

/// Run a CLI command if applicable.
///
/// Returns `true` when the command was handled and the process should exit,
/// `false` for [`CliCommand::RunTui`].
pub fn run_cli_command(command: CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            true
        }
        CliCommand::Help => {
            print!("{}", usage());
            true
        }
        CliCommand::RunTui => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_is_not_handled() {
        assert!(!run_cli_command(CliCommand::RunTui));
    }
}
