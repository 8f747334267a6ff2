// ============================================================
// Layer 3 — Dataset Schema
// ============================================================
// The column partition of the student performance dataset.
//
// This is deliberately hard-coded: the pipeline is built for
// one fixed schema, and every stage (loader, transformer,
// web form) agrees on it through these constants. The order
// of the arrays below IS the feature order of the transformer
// output — numeric columns first, then one one-hot block per
// categorical column.

/// Numeric feature columns, in feature-matrix order.
pub const NUMERIC_COLUMNS: [&str; 2] = ["reading_score", "writing_score"];

/// Categorical feature columns, in feature-matrix order.
pub const CATEGORICAL_COLUMNS: [&str; 5] = [
    "gender",
    "race_ethnicity",
    "parental_level_of_education",
    "lunch",
    "test_preparation_course",
];

/// The regression target. Present in training data only.
pub const TARGET_COLUMN: &str = "math_score";
