// ============================================================
// Layer 4 — Data Ingestion Stage
// ============================================================
// First stage of a training run: reads the raw student CSV,
// shuffles it with a fixed seed, splits it into train/test
// sets, and writes both back out as CSVs under the artifacts
// directory. The transformation stage consumes those files.
//
// Persisting the split (rather than keeping it in memory)
// keeps every training run inspectable — you can open
// artifacts/train.csv and see exactly what the models saw.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::loader::CsvLoader;
use crate::data::splitter::split_train_test;
use crate::domain::record::StudentRecord;
use crate::domain::traits::RecordSource;
use crate::error::{Result, Stage};
use crate::stage_err;

// ─── Ingestion Configuration ─────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfig {
    /// Path to the raw student CSV
    pub raw_data_path: PathBuf,

    /// Where the training split is written
    pub train_path: PathBuf,

    /// Where the test split is written
    pub test_path: PathBuf,

    /// Fraction of records held out for testing (e.g. 0.2)
    pub test_fraction: f64,

    /// Seed for the reproducible shuffle
    pub seed: u64,
}

// ─── DataIngestion ───────────────────────────────────────────────────────────
pub struct DataIngestion {
    config: IngestionConfig,
}

impl DataIngestion {
    pub fn new(config: IngestionConfig) -> Self {
        Self { config }
    }

    /// Read the raw CSV, split it, and persist both splits.
    /// Returns the (train, test) CSV paths for the next stage.
    pub fn execute(&self) -> Result<(PathBuf, PathBuf)> {
        let cfg = &self.config;

        tracing::info!("Reading raw data from '{}'", cfg.raw_data_path.display());
        let records = CsvLoader::new(&cfg.raw_data_path).load_all()?;

        if records.is_empty() {
            return Err(stage_err!(
                Stage::Ingestion,
                "raw data file '{}' contains no records",
                cfg.raw_data_path.display()
            ));
        }

        let (train, test) =
            split_train_test(records, 1.0 - cfg.test_fraction, cfg.seed);
        tracing::info!(
            "Split complete: {} train records, {} test records",
            train.len(),
            test.len()
        );

        write_records(&cfg.train_path, &train)?;
        write_records(&cfg.test_path, &test)?;
        tracing::info!("Ingestion of the data is completed");

        Ok((cfg.train_path.clone(), cfg.test_path.clone()))
    }
}

/// Serialize records to a CSV file, creating parent directories.
fn write_records(path: &Path, records: &[StudentRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            stage_err!(
                Stage::Ingestion,
                "cannot create directory '{}': {e}",
                parent.display()
            )
        })?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        stage_err!(Stage::Ingestion, "cannot create '{}': {e}", path.display())
    })?;

    for record in records {
        writer.serialize(record).map_err(|e| {
            stage_err!(Stage::Ingestion, "cannot write '{}': {e}", path.display())
        })?;
    }
    writer.flush().map_err(|e| {
        stage_err!(Stage::Ingestion, "cannot flush '{}': {e}", path.display())
    })?;

    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_csv(dir: &Path, rows: usize) -> PathBuf {
        let path = dir.join("stud.csv");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(
            f,
            "gender,race_ethnicity,parental_level_of_education,lunch,test_preparation_course,reading_score,writing_score,math_score"
        )
        .unwrap();
        for i in 0..rows {
            let gender = if i % 2 == 0 { "female" } else { "male" };
            writeln!(f, "{gender},group B,some college,standard,none,{},{},{}", 60 + i % 30, 55 + i % 30, 58 + i % 30).unwrap();
        }
        path
    }

    #[test]
    fn test_ingestion_writes_both_splits() {
        let dir = tempfile::tempdir().unwrap();
        let raw = sample_csv(dir.path(), 10);

        let ingestion = DataIngestion::new(IngestionConfig {
            raw_data_path: raw,
            train_path:    dir.path().join("artifacts/train.csv"),
            test_path:     dir.path().join("artifacts/test.csv"),
            test_fraction: 0.2,
            seed:          42,
        });
        let (train_path, test_path) = ingestion.execute().unwrap();

        let train = CsvLoader::new(&train_path).load_all().unwrap();
        let test  = CsvLoader::new(&test_path).load_all().unwrap();
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 2);
    }

    #[test]
    fn test_empty_raw_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let raw = sample_csv(dir.path(), 0);

        let ingestion = DataIngestion::new(IngestionConfig {
            raw_data_path: raw,
            train_path:    dir.path().join("train.csv"),
            test_path:     dir.path().join("test.csv"),
            test_fraction: 0.2,
            seed:          42,
        });
        let err = ingestion.execute().unwrap_err();
        assert!(err.to_string().contains("no records"));
    }
}
