// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Saves and restores trained pipeline artifacts with bincode.
//
// What gets saved per training run:
//   1. preprocessor.bin — the fitted ColumnTransformer,
//      including imputation values, categories, and scales
//   2. model.bin        — the selected regressor
//   3. training_summary.json — which model won and its score
//
// Why save the preprocessor separately from the model?
//   Inference must replay the EXACT preprocessing the model
//   was trained against. Baking the transformer statistics
//   into its own artifact means a raw record can always be
//   turned into the same feature vector the model saw.
//
// File naming convention:
//   artifacts/
//     preprocessor.bin       ← fitted column transformer
//     model.bin              ← selected regressor
//     training_summary.json  ← name + R² of the winner
//     model_report.csv       ← per-model scores (see report.rs)
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::{fs, path::PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Result, Stage};
use crate::stage_err;

/// File name of the fitted preprocessor artifact
pub const PREPROCESSOR_FILE: &str = "preprocessor.bin";

/// File name of the selected model artifact
pub const MODEL_FILE: &str = "model.bin";

/// Manages saving and loading of pipeline artifacts.
/// All files are stored in the configured directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    /// Path to the directory where artifacts are stored
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of an artifact inside the store directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// The store directory itself.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    /// Serialise a value to `{dir}/{name}` with bincode.
    /// Creates the directory first, like `mkdir -p`.
    pub fn save<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            stage_err!(
                Stage::Artifact,
                "cannot create artifact directory '{}': {e}",
                self.dir.display()
            )
        })?;

        let bytes = bincode::serialize(value).map_err(|e| {
            stage_err!(Stage::Artifact, "cannot serialise '{name}': {e}")
        })?;

        let path = self.path(name);
        fs::write(&path, bytes).map_err(|e| {
            stage_err!(
                Stage::Artifact,
                "cannot write artifact '{}': {e}",
                path.display()
            )
        })?;

        tracing::debug!("saved artifact '{}'", path.display());
        Ok(())
    }

    /// Deserialise a value from `{dir}/{name}`.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.path(name);

        let bytes = fs::read(&path).map_err(|e| {
            stage_err!(
                Stage::Artifact,
                "cannot read artifact '{}': {e}. Have you run 'train' first?",
                path.display()
            )
        })?;

        bincode::deserialize(&bytes).map_err(|e| {
            stage_err!(
                Stage::Artifact,
                "cannot deserialise artifact '{}': {e}",
                path.display()
            )
        })
    }

    /// Write a human-readable JSON artifact, pretty-printed.
    pub fn save_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            stage_err!(
                Stage::Artifact,
                "cannot create artifact directory '{}': {e}",
                self.dir.display()
            )
        })?;

        let json = serde_json::to_string_pretty(value).map_err(|e| {
            stage_err!(Stage::Artifact, "cannot serialise '{name}': {e}")
        })?;

        let path = self.path(name);
        fs::write(&path, json).map_err(|e| {
            stage_err!(
                Stage::Artifact,
                "cannot write artifact '{}': {e}",
                path.display()
            )
        })?;
        Ok(())
    }
}
