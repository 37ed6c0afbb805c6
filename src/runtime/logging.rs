use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{self, LoggingSettings};

/// Send `tracing` output to `cadenza.log`; the terminal belongs to the UI.
///
/// `RUST_LOG` overrides the configured filter. Logging is skipped (with a
/// note on stderr) when no log directory can be created. Keep the returned
/// guard alive until exit so buffered lines are flushed.
pub fn init_logging(settings: &LoggingSettings) -> Option<WorkerGuard> {
    let dir = settings
        .dir
        .clone()
        .or_else(|| config::default_data_path("logs"))?;
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("cadenza: cannot create log directory {}: {e}", dir.display());
        return None;
    }

    let file_appender = tracing_appender::rolling::never(&dir, "cadenza.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter));

    let result = tracing_subscriber::fmt()
        .with_writer(file_writer)
        .with_target(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init();
    if let Err(e) = result {
        eprintln!("cadenza: logging disabled: {e}");
        return None;
    }
    Some(guard)
}
