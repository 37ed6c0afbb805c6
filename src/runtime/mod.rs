//! Process startup and the terminal session.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::config;

mod event_loop;
mod logging;
mod settings;
mod startup;

#[cfg(test)]
mod tests;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    let _log_guard = logging::init_logging(&settings.logging);
    info!(version = env!("CARGO_PKG_VERSION"), "starting cadenza");

    let mut app = startup::build_app(&settings)?;

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            if let Err(restore) = disable_raw_mode() {
                warn!(error = %restore, "raw mode: restore failed");
            }
            quit(&app, &settings);
            return Err(e.into());
        }
    };

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);
    let restored = restore_terminal(&mut terminal);
    quit(&app, &settings);

    run_result?;
    restored?;
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Undo `setup_terminal`. Every step runs even if an earlier one failed.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    first_failure([
        ("raw mode", disable_raw_mode()),
        (
            "screen",
            execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture),
        ),
        ("cursor", terminal.show_cursor()),
    ])
}

fn quit(app: &startup::Player, settings: &config::Settings) {
    app.engine
        .media()
        .quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
    info!("bye");
}

/// Log every failed step and return the first failure.
fn first_failure<const N: usize>(steps: [(&str, io::Result<()>); N]) -> io::Result<()> {
    let mut first = Ok(());
    for (step, result) in steps {
        if let Err(e) = result {
            warn!(step, error = %e, "terminal restore failed");
            if first.is_ok() {
                first = Err(e);
            }
        }
    }
    first
}
