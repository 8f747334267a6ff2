// ============================================================
// Layer 4 — Column Transformer
// ============================================================
// Turns a table of raw StudentRecords into a fixed-width
// numeric feature matrix. Two pipelines, one per column kind:
//
//   Numeric columns (reading_score, writing_score):
//     1. Impute missing values with the training median
//     2. Standard scale: (x - mean) / std
//
//   Categorical columns (gender, lunch, ...):
//     1. Impute missing values with the training mode
//     2. One-hot encode over the categories seen at fit time
//     3. Scale WITHOUT mean-centering — the one-hot block is
//        sparse binary and centering would destroy that
//
// Layout invariant: once fit, column order and width are
// stable. Numeric columns come first (schema order), then one
// one-hot block per categorical column, categories sorted
// lexicographically within each block. Width = numeric count
// + total categories learned at fit.
//
// The whole struct is serde-serializable — it IS the
// preprocessor artifact written to disk after fitting.

use std::collections::BTreeMap;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::domain::record::StudentRecord;
use crate::domain::schema::{CATEGORICAL_COLUMNS, NUMERIC_COLUMNS};
use crate::error::{Result, Stage};
use crate::stage_err;

// ─── Fitted state ────────────────────────────────────────────────────────────

/// Learned statistics for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct NumericStats {
    /// Training median, used to fill missing cells
    median: f64,
    /// Training mean, subtracted during scaling
    mean: f64,
    /// Population standard deviation; 1.0 if the column is constant
    scale: f64,
}

/// Learned statistics for one categorical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CategoryStats {
    /// Most frequent training value, used to fill missing cells.
    /// Ties break to the lexicographically smallest value.
    mode: String,
    /// Categories seen at fit time, sorted lexicographically
    categories: Vec<String>,
    /// Per-category scale: the population std of each one-hot
    /// column; 1.0 where that std is zero
    scales: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct FittedState {
    numeric:     Vec<NumericStats>,
    categorical: Vec<CategoryStats>,
    width:       usize,
}

// ─── ColumnTransformer ───────────────────────────────────────────────────────

/// Column-wise preprocessing transformer over the hard-coded
/// schema partition. Created unfit; `fit` learns the statistics,
/// `transform` applies them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnTransformer {
    state: Option<FittedState>,
}

impl ColumnTransformer {
    /// Create a new, unfit transformer.
    pub fn new() -> Self {
        Self { state: None }
    }

    pub fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    /// Output matrix width, available once fitted.
    pub fn feature_width(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.width)
    }

    /// Learn imputation, encoding, and scaling statistics from
    /// training records.
    pub fn fit(&mut self, records: &[StudentRecord]) -> Result<()> {
        if records.is_empty() {
            return Err(stage_err!(
                Stage::Transformation,
                "cannot fit the transformer on an empty training set"
            ));
        }

        let n = records.len() as f64;

        // ── Numeric columns: median, then mean/std of the imputed column ──────
        let mut numeric = Vec::with_capacity(NUMERIC_COLUMNS.len());
        for (idx, column) in NUMERIC_COLUMNS.iter().enumerate() {
            let present: Vec<f64> =
                records.iter().filter_map(|r| r.numeric(idx)).collect();
            if present.is_empty() {
                return Err(stage_err!(
                    Stage::Transformation,
                    "numeric column '{column}' has no values to fit on"
                ));
            }
            let median = median_of(present);

            // mean/std are computed AFTER imputation, exactly as a
            // two-step impute→scale pipeline sees the data
            let imputed: Vec<f64> = records
                .iter()
                .map(|r| r.numeric(idx).unwrap_or(median))
                .collect();
            let mean = imputed.iter().sum::<f64>() / n;
            let var  = imputed.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            let std  = var.sqrt();
            let scale = if std > 0.0 { std } else { 1.0 };

            numeric.push(NumericStats { median, mean, scale });
        }

        // ── Categorical columns: mode, categories, one-hot scales ─────────────
        let mut categorical = Vec::with_capacity(CATEGORICAL_COLUMNS.len());
        for (idx, column) in CATEGORICAL_COLUMNS.iter().enumerate() {
            // Count present values; BTreeMap iterates sorted, so a
            // frequency tie resolves to the smallest value.
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for r in records {
                if let Some(v) = r.categorical(idx) {
                    *counts.entry(v).or_insert(0) += 1;
                }
            }
            if counts.is_empty() {
                return Err(stage_err!(
                    Stage::Transformation,
                    "categorical column '{column}' has no values to fit on"
                ));
            }
            let mode = counts
                .iter()
                .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
                .map(|(v, _)| v.to_string())
                .unwrap_or_default();

            // Categories of the imputed column, sorted. The mode is a
            // seen value by construction, so imputation cannot add a
            // category.
            let categories: Vec<String> =
                counts.keys().map(|v| v.to_string()).collect();

            // Scale of each one-hot column: std of a Bernoulli(p)
            // indicator, sqrt(p * (1 - p)), from imputed frequencies.
            let scales: Vec<f64> = categories
                .iter()
                .map(|cat| {
                    let count = records
                        .iter()
                        .filter(|r| {
                            r.categorical(idx).unwrap_or(mode.as_str()) == cat
                        })
                        .count();
                    let p = count as f64 / n;
                    let std = (p * (1.0 - p)).sqrt();
                    if std > 0.0 {
                        std
                    } else {
                        1.0
                    }
                })
                .collect();

            categorical.push(CategoryStats { mode, categories, scales });
        }

        let width = NUMERIC_COLUMNS.len()
            + categorical.iter().map(|c| c.categories.len()).sum::<usize>();

        self.state = Some(FittedState { numeric, categorical, width });
        Ok(())
    }

    /// Apply the fitted statistics to records, producing the
    /// feature matrix. Errors if the transformer is unfit or a
    /// record carries a category unseen at fit time.
    pub fn transform(&self, records: &[StudentRecord]) -> Result<Array2<f64>> {
        let state = self.state.as_ref().ok_or_else(|| {
            stage_err!(
                Stage::Transformation,
                "transform called before the transformer was fitted"
            )
        })?;

        let mut flat = Vec::with_capacity(records.len() * state.width);
        for record in records {
            // Numeric block
            for (idx, stats) in state.numeric.iter().enumerate() {
                let v = record.numeric(idx).unwrap_or(stats.median);
                flat.push((v - stats.mean) / stats.scale);
            }

            // One-hot blocks
            for (idx, stats) in state.categorical.iter().enumerate() {
                let v = record.categorical(idx).unwrap_or(stats.mode.as_str());
                let pos = stats
                    .categories
                    .binary_search_by(|c| c.as_str().cmp(v))
                    .map_err(|_| {
                        stage_err!(
                            Stage::Transformation,
                            "unknown category '{v}' for column '{}'",
                            CATEGORICAL_COLUMNS[idx]
                        )
                    })?;

                for (i, scale) in stats.scales.iter().enumerate() {
                    flat.push(if i == pos { 1.0 / scale } else { 0.0 });
                }
            }
        }

        Array2::from_shape_vec((records.len(), state.width), flat).map_err(|e| {
            stage_err!(Stage::Transformation, "bad matrix shape: {e}")
        })
    }
}

/// Median of a non-empty sample. Even counts average the middle
/// pair, matching the usual statistical definition.
fn median_of(mut values: Vec<f64>) -> f64 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        gender: &str,
        group: &str,
        edu: &str,
        lunch: &str,
        prep: &str,
        reading: f64,
        writing: f64,
    ) -> StudentRecord {
        StudentRecord::new(gender, group, edu, lunch, prep, reading, writing)
    }

    fn fixture() -> Vec<StudentRecord> {
        vec![
            record("female", "group A", "some college", "standard", "none", 70.0, 72.0),
            record("male", "group B", "some college", "free/reduced", "none", 60.0, 58.0),
            record("female", "group A", "high school", "standard", "completed", 85.0, 90.0),
            record("male", "group B", "high school", "standard", "none", 55.0, 50.0),
        ]
    }

    #[test]
    fn test_width_is_numeric_plus_total_categories() {
        let mut t = ColumnTransformer::new();
        t.fit(&fixture()).unwrap();
        // 2 numeric + gender(2) + group(2) + education(2) + lunch(2) + prep(2)
        assert_eq!(t.feature_width(), Some(12));

        let x = t.transform(&fixture()).unwrap();
        assert_eq!(x.dim(), (4, 12));
    }

    #[test]
    fn test_transform_is_deterministic() {
        let mut t = ColumnTransformer::new();
        t.fit(&fixture()).unwrap();
        let a = t.transform(&fixture()).unwrap();
        let b = t.transform(&fixture()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_numeric_scaling_is_centered() {
        let mut t = ColumnTransformer::new();
        t.fit(&fixture()).unwrap();
        let x = t.transform(&fixture()).unwrap();

        // A standard-scaled column sums to ~0 over the training set
        let reading_sum: f64 = x.column(0).sum();
        assert!(reading_sum.abs() < 1e-9);
    }

    #[test]
    fn test_missing_values_are_imputed() {
        let mut t = ColumnTransformer::new();
        t.fit(&fixture()).unwrap();

        // reading_score median of {70, 60, 85, 55} is 65
        let mut missing = StudentRecord::new(
            "female", "group A", "some college", "standard", "none", 65.0, 60.0,
        );
        missing.reading_score = None;
        missing.gender = None; // mode is "female" (tie → smallest)

        let with_median = t
            .transform(std::slice::from_ref(&missing))
            .unwrap();
        let explicit = t
            .transform(&[record(
                "female", "group A", "some college", "standard", "none", 65.0, 60.0,
            )])
            .unwrap();
        assert_eq!(with_median, explicit);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let mut t = ColumnTransformer::new();
        t.fit(&fixture()).unwrap();

        let unseen = record(
            "female", "group Z", "some college", "standard", "none", 70.0, 70.0,
        );
        let err = t.transform(&[unseen]).unwrap_err();
        assert!(err.to_string().contains("unknown category 'group Z'"));
    }

    #[test]
    fn test_unfitted_transform_fails() {
        let t = ColumnTransformer::new();
        let err = t.transform(&fixture()).unwrap_err();
        assert!(err.to_string().contains("before the transformer was fitted"));
    }

    #[test]
    fn test_constant_column_does_not_divide_by_zero() {
        let rows = vec![
            record("female", "group A", "some college", "standard", "none", 50.0, 70.0),
            record("female", "group A", "some college", "standard", "none", 50.0, 80.0),
        ];
        let mut t = ColumnTransformer::new();
        t.fit(&rows).unwrap();
        let x = t.transform(&rows).unwrap();
        assert!(x.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_serde_round_trip_transforms_identically() {
        let mut t = ColumnTransformer::new();
        t.fit(&fixture()).unwrap();

        let bytes = bincode::serialize(&t).unwrap();
        let restored: ColumnTransformer = bincode::deserialize(&bytes).unwrap();

        assert_eq!(
            t.transform(&fixture()).unwrap(),
            restored.transform(&fixture()).unwrap()
        );
    }

    #[test]
    fn test_median_of_even_and_odd_counts() {
        assert_eq!(median_of(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median_of(vec![4.0, 1.0, 3.0, 2.0]), 2.5);
    }
}
