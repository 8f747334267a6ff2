// ============================================================
// Pipeline Error Type
// ============================================================
// One structured error type for the whole pipeline.
//
// Every failure carries three things:
//   1. The pipeline stage where it happened (the error kind)
//   2. A human-readable message
//   3. The source location (file and line) that raised it
//
// The `stage_err!` macro captures file!() and line!() at the
// call site, so the location always points at the code that
// actually detected the problem — not at this module.
//
// The binary entry point (main.rs) uses anyhow::Result and
// converts automatically via the std::error::Error impl that
// thiserror derives for us.
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use thiserror::Error;

/// Result alias used by every library layer.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// The pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading and splitting the raw CSV
    Ingestion,
    /// Fitting/applying the feature transformer
    Transformation,
    /// Model search, fitting, and selection
    Training,
    /// Applying persisted artifacts to a new record
    Inference,
    /// Saving/loading artifacts on disk
    Artifact,
    /// Web server setup and request handling
    Server,
    /// Logging setup
    Logging,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Ingestion      => "ingestion",
            Stage::Transformation => "transformation",
            Stage::Training       => "training",
            Stage::Inference      => "inference",
            Stage::Artifact       => "artifact",
            Stage::Server         => "server",
            Stage::Logging        => "logging",
        };
        f.write_str(name)
    }
}

/// The single error kind surfaced by the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A failure in one of the pipeline stages, tagged with the
    /// source file and line that raised it.
    #[error("{stage} error in [{file}] at line [{line}]: {message}")]
    Stage {
        stage:   Stage,
        message: String,
        file:    &'static str,
        line:    u32,
    },

    /// Raised by the training stage when no model family clears
    /// the minimum R² quality threshold. Kept as its own variant
    /// so callers (and tests) can recognise it without string
    /// matching.
    #[error("no acceptable model: best r2 score {best:.4} is below the quality threshold {threshold}")]
    NoAcceptableModel { best: f64, threshold: f64 },
}

impl PipelineError {
    /// True if this error is the training quality gate firing.
    pub fn is_quality_gate(&self) -> bool {
        matches!(self, PipelineError::NoAcceptableModel { .. })
    }
}

/// Build a `PipelineError::Stage` with the caller's source location.
///
/// Usage:
///   stage_err!(Stage::Training, "fit failed: {e}")
#[macro_export]
macro_rules! stage_err {
    ($stage:expr, $($arg:tt)*) => {
        $crate::error::PipelineError::Stage {
            stage:   $stage,
            message: format!($($arg)*),
            file:    file!(),
            line:    line!(),
        }
    };
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_error_mentions_location() {
        let e = stage_err!(Stage::Training, "boom: {}", 42);
        let msg = e.to_string();
        assert!(msg.contains("training error"));
        assert!(msg.contains("error.rs"));
        assert!(msg.contains("boom: 42"));
    }

    #[test]
    fn test_quality_gate_is_recognisable() {
        let e = PipelineError::NoAcceptableModel { best: 0.41, threshold: 0.6 };
        assert!(e.is_quality_gate());
        assert!(!stage_err!(Stage::Inference, "x").is_quality_gate());
    }
}
