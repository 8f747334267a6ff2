// ============================================================
// Layer 5 — ML / Model Layer (smartcore)
// ============================================================
// This layer contains ALL smartcore framework specific code.
// No other layer imports from smartcore directly — only this
// one.
//
// Why isolate smartcore code here?
//   - If smartcore's API changes, we only update this layer
//   - Other layers are testable without the ML dependency
//   - The model catalogue is clearly separated from data
//     preprocessing and application logic
//
// What's in this layer:
//
//   models.rs    — Model configurations and fitted regressors
//                  One enum variant per supported family, from
//                  plain linear regression to random forests.
//                  fit() dispatches into smartcore; predict()
//                  dispatches back out.
//
//   catalogue.rs — The candidate model catalogue
//                  Pairs each family with its hyper-parameter
//                  grid for the selection search.
//
//   evaluator.rs — Cross-validated grid search
//                  K-fold splitting, per-candidate CV scoring,
//                  and the full evaluate-every-family sweep.
//
//   trainer.rs   — Model selection and persistence
//                  Runs the sweep, applies the quality gate,
//                  and saves the winning model artifact.
//
//   predictor.rs — The inference engine
//                  Loads the saved preprocessor + model and
//                  scores a single record.
//
//   metrics.rs   — Regression metrics (R², RMSE)
//
// Reference: Rust Book §10 (Generics and Traits)
//            Hastie et al. (2009) Elements of Statistical Learning

/// Regression metrics
pub mod metrics;

/// Model configurations and fitted regressors
pub mod models;

/// Candidate model catalogue with hyper-parameter grids
pub mod catalogue;

/// K-fold cross-validation and grid search
pub mod evaluator;

/// Model selection, quality gate, and persistence
pub mod trainer;

/// Inference engine — loads artifacts and predicts scores
pub mod predictor;
