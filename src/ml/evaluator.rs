// ============================================================
// Layer 5 — Cross-Validated Grid Search
// ============================================================
// Hyper-parameter tuning for the model catalogue:
//
//   1. kfold_indices   — deterministic contiguous k-fold split
//   2. cross_val_score — mean R² of one candidate over k folds
//   3. grid_search     — best candidate of one family's grid
//   4. evaluate_models — the full sweep: tune every family on
//                        the training split, refit the winner
//                        of each grid on ALL training rows, and
//                        score it once on the held-out test set
//
// Fold layout: rows are assigned to folds in order, with the
// first (n mod k) folds one row larger. No shuffling — the
// training split was already shuffled at ingestion, and a
// deterministic layout keeps repeated runs comparable.
//
// Tie-breaking: when two candidates score the same, the FIRST
// one in grid order wins. The scan below uses a strict `>` so
// a later equal score never displaces an earlier one.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Hastie et al. (2009) §7.10 Cross-Validation

use ndarray::{Array1, Array2, Axis};
use tracing::{debug, info};

use crate::error::{Result, Stage};
use crate::ml::catalogue::ModelSpec;
use crate::ml::metrics::{r2_score, rmse};
use crate::ml::models::{ModelConfig, Regressor};
use crate::stage_err;

/// Number of folds used when tuning each candidate grid
pub const CV_FOLDS: usize = 3;

/// One tuned family after the sweep: its best configuration,
/// the refit model, and its test-set score.
pub struct EvaluatedModel {
    pub name:   &'static str,
    pub config: ModelConfig,
    pub r2:     f64,
    pub model:  Regressor,
}

/// Contiguous k-fold assignment over `n` rows. Fold `i` gets
/// rows `[start_i, end_i)`; the first `n % k` folds are one row
/// larger so every row lands in exactly one fold.
pub fn kfold_indices(n: usize, k: usize) -> Result<Vec<(Vec<usize>, Vec<usize>)>> {
    if k < 2 {
        return Err(stage_err!(
            Stage::Training,
            "cross-validation needs at least 2 folds, got {k}"
        ));
    }
    if n < k {
        return Err(stage_err!(
            Stage::Training,
            "cannot split {n} rows into {k} folds"
        ));
    }

    let base  = n / k;
    let extra = n % k;

    let mut folds = Vec::with_capacity(k);
    let mut start = 0;
    for i in 0..k {
        let size = base + usize::from(i < extra);
        let end  = start + size;

        let validation: Vec<usize> = (start..end).collect();
        let training:   Vec<usize> =
            (0..start).chain(end..n).collect();

        folds.push((training, validation));
        start = end;
    }
    Ok(folds)
}

/// Mean R² of one candidate configuration over k folds.
pub fn cross_val_score(
    config: &ModelConfig,
    x: &Array2<f64>,
    y: &Array1<f64>,
    k: usize,
) -> Result<f64> {
    let folds = kfold_indices(x.nrows(), k)?;
    let mut total = 0.0;

    for (train_idx, val_idx) in &folds {
        let x_train = x.select(Axis(0), train_idx);
        let y_train = y.select(Axis(0), train_idx);
        let x_val   = x.select(Axis(0), val_idx);
        let y_val   = y.select(Axis(0), val_idx);

        let model = config.fit(&x_train, &y_train)?;
        let predictions = model.predict(&x_val)?;
        total += r2_score(&y_val, &predictions);
    }

    Ok(total / folds.len() as f64)
}

/// Pick the best configuration from one family's grid by mean
/// cross-validated R². An empty grid skips the search entirely
/// and returns the default configuration.
pub fn grid_search(spec: &ModelSpec, x: &Array2<f64>, y: &Array1<f64>) -> Result<ModelConfig> {
    if spec.grid.is_empty() {
        debug!(model = spec.name, "no grid, using default configuration");
        return Ok(spec.default.clone());
    }

    let mut best: Option<(ModelConfig, f64)> = None;
    for candidate in &spec.grid {
        let score = cross_val_score(candidate, x, y, CV_FOLDS)?;
        debug!(model = spec.name, candidate = %candidate, cv_r2 = score, "scored candidate");

        // strict `>` keeps the earliest candidate on ties
        let improved = match &best {
            Some((_, best_score)) => score > *best_score,
            None => true,
        };
        if improved {
            best = Some((candidate.clone(), score));
        }
    }

    // grid was non-empty, so one candidate was always scored
    let (config, score) = best.ok_or_else(|| {
        stage_err!(Stage::Training, "grid search produced no candidate")
    })?;
    debug!(model = spec.name, config = %config, cv_r2 = score, "selected grid winner");
    Ok(config)
}

/// Run the full sweep over a catalogue: tune each family with
/// grid search, refit its winner on all training rows, and
/// score each refit model once on the held-out test set.
pub fn evaluate_models(
    catalogue: &[ModelSpec],
    x_train: &Array2<f64>,
    y_train: &Array1<f64>,
    x_test: &Array2<f64>,
    y_test: &Array1<f64>,
) -> Result<Vec<EvaluatedModel>> {
    let mut evaluated = Vec::with_capacity(catalogue.len());

    for spec in catalogue {
        let config = grid_search(spec, x_train, y_train)?;
        let model = config.fit(x_train, y_train)?;

        let predictions = model.predict(x_test)?;
        let r2 = r2_score(y_test, &predictions);
        info!(
            model = spec.name,
            config = %config,
            test_r2 = r2,
            test_rmse = rmse(y_test, &predictions),
            "evaluated model family"
        );

        evaluated.push(EvaluatedModel { name: spec.name, config, r2, model });
    }

    Ok(evaluated)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::catalogue::catalogue;
    use ndarray::Array2;

    /// y = 2a + 3b + 0.5 with two informative columns
    fn linear_data(n: usize) -> (Array2<f64>, Array1<f64>) {
        let mut flat = Vec::with_capacity(n * 2);
        let mut y = Vec::with_capacity(n);
        for i in 0..n {
            let a = (i % 13) as f64;
            let b = (i % 5) as f64;
            flat.push(a);
            flat.push(b);
            y.push(2.0 * a + 3.0 * b + 0.5);
        }
        (
            Array2::from_shape_vec((n, 2), flat).unwrap(),
            Array1::from_vec(y),
        )
    }

    #[test]
    fn test_kfold_covers_every_row_exactly_once() {
        let folds = kfold_indices(10, 3).unwrap();
        assert_eq!(folds.len(), 3);

        // 10 rows over 3 folds: sizes 4, 3, 3
        assert_eq!(folds[0].1.len(), 4);
        assert_eq!(folds[1].1.len(), 3);
        assert_eq!(folds[2].1.len(), 3);

        let mut seen: Vec<usize> =
            folds.iter().flat_map(|(_, val)| val.clone()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());

        for (train, val) in &folds {
            assert_eq!(train.len() + val.len(), 10);
            assert!(train.iter().all(|i| !val.contains(i)));
        }
    }

    #[test]
    fn test_kfold_rejects_too_few_rows() {
        assert!(kfold_indices(2, 3).is_err());
        assert!(kfold_indices(10, 1).is_err());
    }

    #[test]
    fn test_cross_val_score_is_high_on_linear_data() {
        let (x, y) = linear_data(60);
        let score =
            cross_val_score(&ModelConfig::LinearRegression, &x, &y, 3).unwrap();
        assert!(score > 0.99, "expected near-perfect CV score, got {score}");
    }

    #[test]
    fn test_grid_search_empty_grid_returns_default() {
        let (x, y) = linear_data(30);
        let spec = ModelSpec {
            name:    "Linear Regression",
            default: ModelConfig::LinearRegression,
            grid:    vec![],
        };
        assert_eq!(grid_search(&spec, &x, &y).unwrap(), ModelConfig::LinearRegression);
    }

    #[test]
    fn test_grid_search_prefers_weaker_regularisation_on_clean_data() {
        let (x, y) = linear_data(60);
        let spec = ModelSpec {
            name:    "Ridge",
            default: ModelConfig::Ridge { alpha: 1.0 },
            grid:    vec![
                ModelConfig::Ridge { alpha: 0.001 },
                ModelConfig::Ridge { alpha: 1000.0 },
            ],
        };
        // On noiseless linear data, heavy shrinkage can only hurt
        assert_eq!(
            grid_search(&spec, &x, &y).unwrap(),
            ModelConfig::Ridge { alpha: 0.001 }
        );
    }

    #[test]
    fn test_evaluate_models_scores_every_family() {
        let (x_train, y_train) = linear_data(60);
        let (x_test, y_test) = linear_data(20);

        let specs = catalogue();
        let evaluated =
            evaluate_models(&specs, &x_train, &y_train, &x_test, &y_test).unwrap();

        assert_eq!(evaluated.len(), specs.len());
        assert!(evaluated.iter().all(|m| m.r2.is_finite()));

        // Linear families should nail a noiseless linear target
        let linear = evaluated
            .iter()
            .find(|m| m.name == "Linear Regression")
            .unwrap();
        assert!(linear.r2 > 0.99);
    }
}
