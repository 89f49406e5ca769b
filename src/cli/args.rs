//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first item is the program name and is skipped. The first recognized
/// flag wins; unknown arguments are ignored.
///
/// ```
/// use chirp::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["chirp".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::RunTui
}

/// Usage text printed by `--help`.
pub fn usage() -> String {
    format!(
        "chirp {}\n\
         A terminal social feed mockup.\n\n\
         USAGE:\n    chirp [OPTIONS]\n\n\
         OPTIONS:\n    -h, --help       Print help\n    -V, --version    Print version\n\n\
         ENVIRONMENT:\n    CHIRP_THEME      Initial theme: dark (default) or light\n    \
         CHIRP_LOG        Log filter, e.g. debug or chirp=trace (logging is off when unset)\n    \
         CHIRP_LOG_FILE   Log file path (default: <cache dir>/chirp/chirp.log)\n",
        super::VERSION
    )
}
