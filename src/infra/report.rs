// ============================================================
// Layer 6 — Evaluation Report Writer
// ============================================================
// Records per-model evaluation scores to a CSV file after a
// training run.
//
// Why log scores to CSV?
//   - Easy to open in Excel or Google Sheets
//   - Lets you compare model families across runs
//   - Provides a permanent record of each selection decision
//
// Output file: artifacts/model_report.csv
//
// Example CSV output:
//   model,r2_score
//   Linear Regression,0.874213
//   Ridge,0.880151
//   Random Forest,0.851902
//
// How to read the report:
//   - One row per model family, scored on the held-out test set
//   - The selected model is the row with the highest r2_score
//   - Scores below the quality gate mean no model was saved
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::{fs, io::Write, path::PathBuf};

use crate::domain::report::EvaluationReport;
use crate::error::{Result, Stage};
use crate::stage_err;

/// Writes an evaluation report as CSV into a directory.
pub struct ReportWriter {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl ReportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self { csv_path: dir.join("model_report.csv") }
    }

    /// Write the whole report, header first, overwriting any
    /// report from a previous run.
    pub fn write(&self, report: &EvaluationReport) -> Result<()> {
        if let Some(parent) = self.csv_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                stage_err!(
                    Stage::Artifact,
                    "cannot create report directory '{}': {e}",
                    parent.display()
                )
            })?;
        }

        let mut f = fs::File::create(&self.csv_path).map_err(|e| {
            stage_err!(
                Stage::Artifact,
                "cannot create report file '{}': {e}",
                self.csv_path.display()
            )
        })?;

        writeln!(f, "model,r2_score").map_err(write_err)?;
        for entry in &report.entries {
            writeln!(f, "{},{:.6}", entry.name, entry.r2).map_err(write_err)?;
        }

        tracing::debug!("wrote evaluation report '{}'", self.csv_path.display());
        Ok(())
    }

    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

fn write_err(e: std::io::Error) -> crate::error::PipelineError {
    stage_err!(Stage::Artifact, "cannot write report row: {e}")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::ModelScore;

    #[test]
    fn test_report_rows_match_entries() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());

        let report = EvaluationReport {
            entries: vec![
                ModelScore { name: "Linear Regression".into(), r2: 0.87 },
                ModelScore { name: "Ridge".into(), r2: 0.88 },
            ],
        };
        writer.write(&report).unwrap();

        let contents = fs::read_to_string(writer.csv_path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "model,r2_score");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Linear Regression,0.87"));
    }
}
