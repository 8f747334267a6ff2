// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles all cross-cutting concerns that don't belong in
// any specific business layer:
//
//   artifact_store.rs — Saving and loading pipeline artifacts
//                       Serialises the fitted preprocessor and
//                       the selected model to disk with bincode
//                       so inference can rebuild the exact
//                       pipeline from a previous training run.
//
//   logging.rs        — Tracing subscriber setup
//                       Sends structured log records to both
//                       stdout and a timestamped file under
//                       logs/, one file per run.
//
//   report.rs         — Model evaluation report writer
//                       Writes the per-model R² scores from a
//                       training run to a CSV file for later
//                       analysis and comparison.
//
// Why is this a separate layer?
//   These concerns are used by multiple other layers but
//   don't belong to any one of them. Keeping them here:
//   - Prevents duplication across layers
//   - Makes it easy to swap implementations
//     (e.g. swap file artifacts for S3 cloud storage)
//   - Keeps other layers focused on their core logic
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// Pipeline artifact saving and loading
pub mod artifact_store;

/// Tracing subscriber: stdout + per-run log file
pub mod logging;

/// Evaluation report CSV writer
pub mod report;
