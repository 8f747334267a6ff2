// ============================================================
// Layer 5 — Prediction Engine
// ============================================================
// Inference side of the pipeline. Loads the two artifacts a
// training run produced — the fitted preprocessor and the
// selected model — and scores one raw record at a time.
//
// Artifacts are re-read on every call rather than cached, so
// a fresh training run takes effect without restarting the
// process serving predictions.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §17 (Trait Objects)

use tracing::debug;

use crate::data::transformer::ColumnTransformer;
use crate::domain::record::StudentRecord;
use crate::domain::traits::ScorePredictor;
use crate::error::{Result, Stage};
use crate::infra::artifact_store::{ArtifactStore, MODEL_FILE, PREPROCESSOR_FILE};
use crate::ml::models::Regressor;
use crate::stage_err;

pub struct Predictor {
    store: ArtifactStore,
}

impl Predictor {
    pub fn new(store: ArtifactStore) -> Self {
        Self { store }
    }
}

impl ScorePredictor for Predictor {
    /// Predict the math score for one raw record.
    fn predict(&self, record: &StudentRecord) -> Result<f64> {
        let transformer: ColumnTransformer = self.store.load(PREPROCESSOR_FILE)?;
        let model: Regressor = self.store.load(MODEL_FILE)?;

        let features = transformer.transform(std::slice::from_ref(record))?;
        let predictions = model.predict(&features)?;

        let score = predictions.first().copied().ok_or_else(|| {
            stage_err!(Stage::Inference, "model returned no prediction")
        })?;
        debug!(score, "predicted math score");
        Ok(score)
    }
}
