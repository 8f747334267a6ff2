// ============================================================
// Layer 5 — Regression Metrics
// ============================================================
// R² (coefficient of determination) drives both the grid
// search and the final model selection:
//
//   R² = 1 - Σ(y - ŷ)² / Σ(y - ȳ)²
//
// How to read R²:
//   - 1.0 means perfect prediction
//   - 0.0 means no better than predicting the mean
//   - Negative means WORSE than predicting the mean
//
// A constant target makes the denominator zero; that is a
// degenerate evaluation set, reported as 0.0 rather than NaN
// so a bad fold cannot poison a cross-validation average.
//
// Reference: Rust Book §10 (Generics)

use ndarray::Array1;

/// Coefficient of determination over a prediction set.
pub fn r2_score(actual: &Array1<f64>, predicted: &Array1<f64>) -> f64 {
    assert_eq!(
        actual.len(),
        predicted.len(),
        "actual and predicted must have the same length"
    );
    if actual.is_empty() {
        return 0.0;
    }

    let mean = actual.sum() / actual.len() as f64;
    let ss_tot: f64 = actual.iter().map(|y| (y - mean).powi(2)).sum();
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(y, p)| (y - p).powi(2))
        .sum();

    if ss_tot == 0.0 {
        return 0.0;
    }
    1.0 - ss_res / ss_tot
}

/// Root mean squared error, in target units.
pub fn rmse(actual: &Array1<f64>, predicted: &Array1<f64>) -> f64 {
    assert_eq!(
        actual.len(),
        predicted.len(),
        "actual and predicted must have the same length"
    );
    if actual.is_empty() {
        return 0.0;
    }

    let mse: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(y, p)| (y - p).powi(2))
        .sum::<f64>()
        / actual.len() as f64;
    mse.sqrt()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_perfect_prediction_scores_one() {
        let y = array![1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(r2_score(&y, &y), 1.0);
        assert_relative_eq!(rmse(&y, &y), 0.0);
    }

    #[test]
    fn test_mean_prediction_scores_zero() {
        let y = array![1.0, 2.0, 3.0];
        let mean = array![2.0, 2.0, 2.0];
        assert_relative_eq!(r2_score(&y, &mean), 0.0);
    }

    #[test]
    fn test_bad_prediction_goes_negative() {
        let y = array![1.0, 2.0, 3.0];
        let bad = array![10.0, -5.0, 20.0];
        assert!(r2_score(&y, &bad) < 0.0);
    }

    #[test]
    fn test_constant_target_reports_zero_not_nan() {
        let y = array![5.0, 5.0, 5.0];
        let p = array![4.0, 5.0, 6.0];
        assert_relative_eq!(r2_score(&y, &p), 0.0);
    }

    #[test]
    fn test_rmse_known_value() {
        let y = array![0.0, 0.0];
        let p = array![3.0, 4.0];
        // sqrt((9 + 16) / 2) = sqrt(12.5)
        assert_relative_eq!(rmse(&y, &p), 12.5f64.sqrt());
    }
}
