// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// The single-record prediction workflow. Wraps the prediction
// engine behind the ScorePredictor trait so the callers above
// (CLI and web) never see the ML layer directly.
//
// Reference: Rust Book §17 (Trait Objects)

use crate::domain::record::StudentRecord;
use crate::domain::traits::ScorePredictor;
use crate::error::Result;
use crate::infra::artifact_store::ArtifactStore;
use crate::ml::predictor::Predictor;

pub struct PredictUseCase {
    predictor: Box<dyn ScorePredictor>,
}

impl PredictUseCase {
    /// Build the use case on top of the saved artifacts.
    pub fn new(artifacts_dir: impl Into<std::path::PathBuf>) -> Self {
        let store = ArtifactStore::new(artifacts_dir.into());
        Self { predictor: Box::new(Predictor::new(store)) }
    }

    /// Mainly for tests: inject any predictor implementation.
    pub fn with_predictor(predictor: Box<dyn ScorePredictor>) -> Self {
        Self { predictor }
    }

    /// Predict the math score for one student record.
    pub fn execute(&self, record: &StudentRecord) -> Result<f64> {
        self.predictor.predict(record)
    }
}
