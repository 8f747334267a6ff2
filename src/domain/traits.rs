// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code that
// uses them. For example:
//   - CsvLoader implements RecordSource
//   - A future ParquetLoader could also implement RecordSource
//   - The pipeline stages only see RecordSource and work with
//     both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::record::StudentRecord;
use crate::error::Result;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can load student records from a source.
///
/// Implementations:
///   - CsvLoader → loads from a CSV file
pub trait RecordSource {
    /// Load all available records from this source.
    fn load_all(&self) -> Result<Vec<StudentRecord>>;
}

// ─── ScorePredictor ───────────────────────────────────────────────────────────
/// Any component that can predict a math score for one record.
///
/// Implementations:
///   - ml::predictor::Predictor → persisted transformer + model
///
/// Send + Sync because the web layer shares one predictor
/// across request handlers.
pub trait ScorePredictor: Send + Sync {
    /// Predict the math score for a single raw record.
    fn predict(&self, record: &StudentRecord) -> Result<f64>;
}
