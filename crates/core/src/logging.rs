//! Tracing setup shared by every dbscope entry point.
//!
//! Each component writes to its own daily-rotated file under
//! [`log_dir`]. `RUST_LOG` overrides the default `info` filter.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "info";

/// `~/.dbscope/logs`, or `./.dbscope/logs` when there is no home directory.
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dbscope")
        .join("logs")
}

/// Install the global subscriber for `component`.
///
/// Log lines are flushed by a background writer for as long as the returned
/// guard is alive; keep it until the process exits.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let dir = log_dir();
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("dbscope: cannot create log directory {}: {err}", dir.display());
    }

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, component));
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(stderr_layer)
        .init();

    guard
}
