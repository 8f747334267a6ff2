// ============================================================
// Layer 5 — Model Trainer
// ============================================================
// Third pipeline stage: model selection. Runs the catalogue
// sweep, writes the per-family score report, applies the
// quality gate, and persists the winner.
//
// Selection rule:
//   - Every family is scored by R² on the held-out test set
//   - The highest score wins; ties go to the family listed
//     first in the catalogue
//   - A best score below the quality gate (0.6) aborts the
//     run with NoAcceptableModel and saves NOTHING — a model
//     that weak must never silently reach inference
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §13 (Iterators)

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::data::transformation::TransformedData;
use crate::domain::report::{EvaluationReport, ModelScore};
use crate::error::{PipelineError, Result};
use crate::infra::artifact_store::{ArtifactStore, MODEL_FILE};
use crate::infra::report::ReportWriter;
use crate::ml::catalogue::{catalogue, ModelSpec};
use crate::ml::evaluator::evaluate_models;

/// Minimum acceptable test-set R² for a model to be saved
pub const QUALITY_THRESHOLD: f64 = 0.6;

/// What a successful training run produced. Also written to
/// artifacts/training_summary.json for the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingOutcome {
    /// Family name of the selected model
    pub best_model: String,
    /// Its R² on the held-out test set
    pub r2: f64,
}

pub struct ModelTrainer {
    store:     ArtifactStore,
    catalogue: Vec<ModelSpec>,
    threshold: f64,
}

impl ModelTrainer {
    pub fn new(store: ArtifactStore) -> Self {
        Self {
            store,
            catalogue: catalogue(),
            threshold: QUALITY_THRESHOLD,
        }
    }

    /// Replace the candidate catalogue. Mainly for tests that
    /// need a small or deliberately weak sweep.
    pub fn with_catalogue(mut self, catalogue: Vec<ModelSpec>) -> Self {
        self.catalogue = catalogue;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run selection over the transformed data and persist the
    /// winning model.
    pub fn train(&self, data: &TransformedData) -> Result<TrainingOutcome> {
        info!(
            families = self.catalogue.len(),
            train_rows = data.x_train.nrows(),
            test_rows = data.x_test.nrows(),
            "starting model selection"
        );

        let evaluated = evaluate_models(
            &self.catalogue,
            &data.x_train,
            &data.y_train,
            &data.x_test,
            &data.y_test,
        )?;

        let report = EvaluationReport::new(
            evaluated
                .iter()
                .map(|m| ModelScore { name: m.name.to_string(), r2: m.r2 })
                .collect(),
        );
        ReportWriter::new(self.store.dir()).write(&report)?;

        // best() keeps the earliest family on ties
        let winner = report.best().ok_or_else(|| {
            crate::stage_err!(
                crate::error::Stage::Training,
                "the model catalogue is empty"
            )
        })?;
        let best = evaluated
            .iter()
            .find(|m| m.name == winner.name)
            .ok_or_else(|| {
                crate::stage_err!(
                    crate::error::Stage::Training,
                    "report entry '{}' has no evaluated model",
                    winner.name
                )
            })?;

        if best.r2 < self.threshold {
            warn!(
                best_model = best.name,
                best_r2 = best.r2,
                threshold = self.threshold,
                "no model passed the quality gate, nothing saved"
            );
            return Err(PipelineError::NoAcceptableModel {
                best:      best.r2,
                threshold: self.threshold,
            });
        }

        self.store.save(MODEL_FILE, &best.model)?;
        let outcome = TrainingOutcome {
            best_model: best.name.to_string(),
            r2:         best.r2,
        };
        self.store.save_json("training_summary.json", &outcome)?;

        info!(
            best_model = %outcome.best_model,
            config = %best.config,
            r2 = outcome.r2,
            "selected and saved best model"
        );
        Ok(outcome)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::models::ModelConfig;
    use ndarray::{Array1, Array2};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn linear_split(n_train: usize, n_test: usize) -> TransformedData {
        let make = |n: usize, offset: usize| {
            let mut flat = Vec::with_capacity(n * 2);
            let mut y = Vec::with_capacity(n);
            for i in 0..n {
                let a = ((i + offset) % 11) as f64;
                let b = ((i + offset) % 4) as f64;
                flat.push(a);
                flat.push(b);
                y.push(2.0 * a + 3.0 * b + 0.5);
            }
            (
                Array2::from_shape_vec((n, 2), flat).unwrap(),
                Array1::from_vec(y),
            )
        };
        let (x_train, y_train) = make(n_train, 0);
        let (x_test, y_test) = make(n_test, 3);
        TransformedData { x_train, y_train, x_test, y_test }
    }

    /// Pure-noise target no regressor can learn
    fn noise_split(n_train: usize, n_test: usize) -> TransformedData {
        let mut rng = StdRng::seed_from_u64(7);
        let mut make = |n: usize| {
            let flat: Vec<f64> = (0..n * 2).map(|_| rng.gen_range(-1.0..1.0)).collect();
            let y: Vec<f64> = (0..n).map(|_| rng.gen_range(-100.0..100.0)).collect();
            (
                Array2::from_shape_vec((n, 2), flat).unwrap(),
                Array1::from_vec(y),
            )
        };
        let (x_train, y_train) = make(n_train);
        let (x_test, y_test) = make(n_test);
        TransformedData { x_train, y_train, x_test, y_test }
    }

    fn linear_only_catalogue() -> Vec<ModelSpec> {
        vec![ModelSpec {
            name:    "Linear Regression",
            default: ModelConfig::LinearRegression,
            grid:    vec![],
        }]
    }

    #[test]
    fn test_train_saves_model_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let trainer =
            ModelTrainer::new(store.clone()).with_catalogue(linear_only_catalogue());

        let outcome = trainer.train(&linear_split(60, 20)).unwrap();
        assert_eq!(outcome.best_model, "Linear Regression");
        assert!(outcome.r2 > 0.99);

        assert!(store.exists(MODEL_FILE));
        assert!(store.exists("model_report.csv"));
        assert!(store.exists("training_summary.json"));
    }

    #[test]
    fn test_quality_gate_rejects_weak_models_and_saves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let trainer =
            ModelTrainer::new(store.clone()).with_catalogue(linear_only_catalogue());

        let err = trainer.train(&noise_split(60, 20)).unwrap_err();
        assert!(err.is_quality_gate());
        assert!(!store.exists(MODEL_FILE));
    }

    #[test]
    fn test_empty_catalogue_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let trainer =
            ModelTrainer::new(ArtifactStore::new(dir.path())).with_catalogue(vec![]);

        assert!(trainer.train(&linear_split(30, 10)).is_err());
    }
}
