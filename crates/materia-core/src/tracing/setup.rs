//! Tracing initialization and configuration.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initialize the Materia tracing/logging system.
///
/// Reads the `MATERIA_LOG` environment variable for console log levels.
/// Format: `MATERIA_LOG=materia_epd=debug,materia_core=warn`
///
/// Falls back to `materia=info` (or `materia=debug` when `verbose`) if
/// `MATERIA_LOG` is not set or is invalid. When `log_file` is given, every
/// record at debug and above is also written there as JSON lines.
///
/// Idempotent: later calls return the log file chosen by the first
/// successful call and install nothing.
pub fn init_tracing(verbose: bool, log_file: Option<&Path>) -> std::io::Result<Option<PathBuf>> {
    if let Some(existing) = INIT.get() {
        return Ok(existing.clone());
    }

    let fallback = if verbose { "materia=debug" } else { "materia=info" };
    let console_filter =
        EnvFilter::try_from_env("MATERIA_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    let console = fmt::layer()
        .with_target(true)
        .with_filter(console_filter);

    let (json, path) = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = File::create(path)?;
            let layer = fmt::layer()
                .json()
                .with_writer(Mutex::new(file))
                .with_filter(EnvFilter::new("materia=debug"));
            (Some(layer), Some(path.to_path_buf()))
        }
        None => (None, None),
    };

    // A subscriber installed by someone else (e.g. a test harness) wins.
    let _ = tracing_subscriber::registry()
        .with(console)
        .with(json)
        .try_init();

    Ok(INIT.get_or_init(|| path).clone())
}
