use chirp::app::App;
use chirp::cli::{parse_args, run_cli_command};
use chirp::error::{ChirpResult, UiError};
use chirp::startup::{init_logging, AppConfig};
use chirp::terminal::{setup_panic_hook, TerminalManager};
use chirp::ui;
use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;

/// Redraw tick for the event loop
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Handle --version and --help before any terminal setup
    if run_cli_command(parse_args(std::env::args())) {
        return Ok(());
    }

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let (config, mut manager) = match prepare() {
        Ok(ready) => ready,
        Err(err) => {
            tracing::error!(code = err.error_code(), error = %err, "startup failed");
            eprintln!("{}", err.report());
            std::process::exit(1);
        }
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::new(&config);
    if let Ok(size) = manager.size() {
        app.update_terminal_dimensions(size.width, size.height);
    }

    let result = runtime.block_on(run_app(manager.terminal(), &mut app));

    // Restore before reporting so errors print to a sane terminal
    manager.restore()?;
    tracing::info!("chirp exiting");
    result
}

/// Read the environment, open the log file and take over the terminal.
fn prepare() -> ChirpResult<(AppConfig, TerminalManager)> {
    let config = AppConfig::from_env()?;
    if let Some(path) = init_logging(&config)? {
        tracing::info!(path = %path.display(), theme = %config.theme, "chirp starting");
    }
    let manager = TerminalManager::new()?;
    Ok((config, manager))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let mut event_stream = EventStream::new();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal
                .draw(|f| {
                    ui::render(f, &mut *app);
                })
                .map_err(|e| UiError::RenderFailed {
                    message: e.to_string(),
                })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                // Clock rollover refreshes relative timestamps
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => app.handle_event(event),
                    Some(Err(err)) => {
                        let err = UiError::InputError { message: err.to_string() };
                        tracing::warn!(code = err.error_code(), error = %err, "skipping terminal event");
                    }
                    None => app.quit(),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
