// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the raw CSV file all the
// way to the numeric matrices the estimators consume.
//
// The pipeline flows in this order:
//
//   raw CSV (stud.csv)
//       │
//       ▼
//   CsvLoader          → reads rows into StudentRecords
//       │
//       ▼
//   split_train_test   → seeded shuffle + fractional split
//       │
//       ▼
//   DataIngestion      → writes artifacts/train.csv + test.csv
//       │
//       ▼
//   ColumnTransformer  → impute, one-hot encode, scale
//       │
//       ▼
//   DataTransformation → fits on train, applies to both splits
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads student records from CSV files
pub mod loader;

/// Shuffles and splits records into train/test sets
pub mod splitter;

/// Splits the raw CSV into persisted train/test CSVs
pub mod ingestion;

/// Imputation + one-hot encoding + scaling of record tables
pub mod transformer;

/// Fits the transformer on train data and applies it to both splits
pub mod transformation;
