// ============================================================
// Layer 6 — Logging Setup
// ============================================================
// Configures the global tracing subscriber. Every run writes
// to two destinations at once:
//
//   1. stdout                 — live progress for the operator
//   2. logs/<timestamp>.log   — permanent record of the run
//
// One log file per invocation, named after the start time in
// MM_DD_YYYY_HH_MM_SS form, e.g. logs/08_30_2026_14_02_11.log.
// File records carry the source file and line number so an
// error in the log can be traced straight back to the code.
//
// Log level defaults to `info` for this crate and can be
// overridden per-module with the standard RUST_LOG variable.
//
// Reference: Rust Book §9 (Error Handling)
//            tracing-subscriber docs (fmt + EnvFilter)

use std::{fs, path::Path, sync::Arc};

use tracing_subscriber::fmt::writer::MakeWriterExt;

use crate::error::{Result, Stage};
use crate::stage_err;

/// Install the global subscriber. Call once, before any other
/// work; a second call fails because the subscriber is global.
pub fn init(log_dir: impl AsRef<Path>) -> Result<()> {
    let log_dir = log_dir.as_ref();
    fs::create_dir_all(log_dir).map_err(|e| {
        stage_err!(
            Stage::Logging,
            "cannot create log directory '{}': {e}",
            log_dir.display()
        )
    })?;

    let file_name = format!("{}.log", chrono::Local::now().format("%m_%d_%Y_%H_%M_%S"));
    let log_path  = log_dir.join(file_name);
    let log_file  = fs::File::create(&log_path).map_err(|e| {
        stage_err!(
            Stage::Logging,
            "cannot create log file '{}': {e}",
            log_path.display()
        )
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("math_score_predictor=info".parse().unwrap()),
        )
        .with_writer(Arc::new(log_file).and(std::io::stdout))
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| {
            stage_err!(Stage::Logging, "cannot install tracing subscriber: {e}")
        })?;

    tracing::info!("logging to '{}'", log_path.display());
    Ok(())
}
