// ============================================================
// Layer 4 — CSV Record Loader
// ============================================================
// Loads student records from a CSV file using the csv crate's
// serde integration: every row deserializes straight into a
// StudentRecord, with empty cells becoming None.
//
// A malformed row is an error, not a skip — the dataset is the
// pipeline's contract, and silently dropping rows would bias
// the split and the fitted transformer.
//
// Reference: csv crate documentation (Tutorial: reading with serde)
//            Rust Book §9 (Error Handling)

use std::path::{Path, PathBuf};

use crate::domain::record::StudentRecord;
use crate::domain::traits::RecordSource;
use crate::error::{Result, Stage};
use crate::stage_err;

/// Loads all records from a single CSV file.
/// Implements the RecordSource trait from Layer 3.
pub struct CsvLoader {
    /// Path to the CSV file
    path: PathBuf,
}

impl CsvLoader {
    /// Create a new CsvLoader pointed at a file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvLoader {
    fn load_all(&self) -> Result<Vec<StudentRecord>> {
        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            stage_err!(
                Stage::Ingestion,
                "cannot open '{}': {e}",
                self.path.display()
            )
        })?;

        let mut records = Vec::new();
        for (row, result) in reader.deserialize::<StudentRecord>().enumerate() {
            let record = result.map_err(|e| {
                // +2: one for the header line, one for 1-based numbering
                stage_err!(
                    Stage::Ingestion,
                    "bad row {} in '{}': {e}",
                    row + 2,
                    self.path.display()
                )
            })?;
            records.push(record);
        }

        tracing::info!(
            "Loaded {} records from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}
