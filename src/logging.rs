// File: ./src/logging.rs
//! File logging and panic capture.
//!
//! The terminal belongs to the TUI while it runs, so log records go to
//! `tabnote.log` in the data directory instead of stderr.

use crate::context::AppContext;
use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Installs the global logger. Returns the log file path.
///
/// Fails if a logger is already installed for this process.
pub fn init_logging(ctx: &dyn AppContext, level: LevelFilter) -> Result<PathBuf> {
    let path = ctx.get_log_file_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    WriteLogger::init(level, config, file).context("Logger already initialized")?;
    log::info!(
        "tabnote v{} started (level {})",
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(path)
}

/// Appends panics to `tabnote_panic.log`, then defers to the previous hook.
pub fn install_panic_hook(ctx: &dyn AppContext) {
    let panic_log = ctx.get_panic_log_path();
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log::error!("PANIC: {}", info);
        if let Some(path) = &panic_log
            && let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path)
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));
}
