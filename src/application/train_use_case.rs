// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Ingest raw CSV, split train/test  (Layer 4 - data)
//   Step 2: Fit preprocessor, build matrices  (Layer 4 - data)
//   Step 3: Select and persist best model     (Layer 5 - ml)
//
// Reference: Rust Book §9 (Error Handling)

use serde::{Deserialize, Serialize};

use crate::data::ingestion::{DataIngestion, IngestionConfig};
use crate::data::transformation::DataTransformation;
use crate::error::Result;
use crate::infra::artifact_store::ArtifactStore;
use crate::ml::trainer::{ModelTrainer, TrainingOutcome};

// ─── Training Configuration ──────────────────────────────────────────────────
// All settings for a training run. Serialisable so a run's
// configuration can be recorded alongside its artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Raw CSV with one row per student
    pub data_path:     String,
    /// Where artifacts (preprocessor, model, report) land
    pub artifacts_dir: String,
    /// Fraction of rows held out for the test split
    pub test_fraction: f64,
    /// Shuffle seed, fixed so runs are reproducible
    pub seed:          u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_path:     "data/stud.csv".to_string(),
            artifacts_dir: "artifacts".to_string(),
            test_fraction: 0.2,
            seed:          42,
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full training pipeline.
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end.
    pub fn execute(&self) -> Result<TrainingOutcome> {
        let cfg = &self.config;
        let store = ArtifactStore::new(&cfg.artifacts_dir);

        // ── Step 1: Ingest raw data and split train/test ──────────────────────
        // Reads the source CSV, shuffles with the fixed seed, and
        // writes the two split files next to the artifacts.
        tracing::info!("Ingesting data from '{}'", cfg.data_path);
        let ingestion = DataIngestion::new(IngestionConfig {
            raw_data_path: cfg.data_path.clone().into(),
            train_path:    store.path("train.csv"),
            test_path:     store.path("test.csv"),
            test_fraction: cfg.test_fraction,
            seed:          cfg.seed,
        });
        let (train_path, test_path) = ingestion.execute()?;

        // ── Step 2: Fit the preprocessor, build feature matrices ──────────────
        // The transformer is fitted on the training split only and
        // saved so inference replays identical preprocessing.
        let transformation = DataTransformation::new(store.clone());
        let data = transformation.execute(&train_path, &test_path)?;

        // ── Step 3: Model selection and persistence ───────────────────────────
        // Grid-searches the catalogue, applies the quality gate,
        // and saves the winner.
        let trainer = ModelTrainer::new(store);
        let outcome = trainer.train(&data)?;

        tracing::info!(
            "Training complete: {} (R² = {:.4})",
            outcome.best_model,
            outcome.r2
        );
        Ok(outcome)
    }
}
