// ============================================================
// Layer 4 — Data Transformation Stage
// ============================================================
// Second pipeline stage: reads the train/test splits written by
// ingestion, fits the column transformer on the TRAINING split
// only, applies it to both, and persists the fitted transformer
// so inference can replay the exact same preprocessing.

use std::path::Path;

use ndarray::{Array1, Array2};
use tracing::info;

use crate::data::loader::CsvLoader;
use crate::data::transformer::ColumnTransformer;
use crate::domain::record::StudentRecord;
use crate::domain::schema::TARGET_COLUMN;
use crate::domain::traits::RecordSource;
use crate::error::{Result, Stage};
use crate::infra::artifact_store::{ArtifactStore, PREPROCESSOR_FILE};
use crate::stage_err;

/// Feature matrices and target vectors for both splits,
/// everything downstream training needs.
#[derive(Debug, Clone)]
pub struct TransformedData {
    pub x_train: Array2<f64>,
    pub y_train: Array1<f64>,
    pub x_test:  Array2<f64>,
    pub y_test:  Array1<f64>,
}

pub struct DataTransformation {
    store: ArtifactStore,
}

impl DataTransformation {
    pub fn new(store: ArtifactStore) -> Self {
        Self { store }
    }

    /// Run the stage: fit on train, transform both splits, save
    /// the fitted transformer artifact.
    pub fn execute(
        &self,
        train_path: &Path,
        test_path: &Path,
    ) -> Result<TransformedData> {
        info!("starting data transformation");

        let train = CsvLoader::new(train_path).load_all()?;
        let test  = CsvLoader::new(test_path).load_all()?;
        info!(
            train_rows = train.len(),
            test_rows = test.len(),
            "loaded train/test splits"
        );

        let y_train = extract_target(&train)?;
        let y_test  = extract_target(&test)?;

        let mut transformer = ColumnTransformer::new();
        transformer.fit(&train)?;
        info!(
            feature_width = transformer.feature_width().unwrap_or(0),
            "fitted column transformer on training split"
        );

        let x_train = transformer.transform(&train)?;
        let x_test  = transformer.transform(&test)?;

        self.store.save(PREPROCESSOR_FILE, &transformer)?;
        info!(artifact = PREPROCESSOR_FILE, "saved preprocessor artifact");

        Ok(TransformedData { x_train, y_train, x_test, y_test })
    }
}

/// Pull the math_score target out of every record; a split row
/// without a target is a hard error, not something to impute.
fn extract_target(records: &[StudentRecord]) -> Result<Array1<f64>> {
    let values = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            r.math_score.ok_or_else(|| {
                stage_err!(
                    Stage::Transformation,
                    "row {} is missing the '{TARGET_COLUMN}' target",
                    i + 1
                )
            })
        })
        .collect::<Result<Vec<f64>>>()?;
    Ok(Array1::from_vec(values))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            "gender,race_ethnicity,parental_level_of_education,lunch,\
             test_preparation_course,math_score,reading_score,writing_score"
        )
        .unwrap();
        for row in rows {
            writeln!(f, "{row}").unwrap();
        }
        path
    }

    #[test]
    fn test_execute_produces_matching_shapes_and_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let train = write_csv(
            dir.path(),
            "train.csv",
            &[
                "female,group A,some college,standard,none,66,70,72",
                "male,group B,high school,free/reduced,none,50,60,58",
                "female,group A,high school,standard,completed,88,85,90",
            ],
        );
        let test = write_csv(
            dir.path(),
            "test.csv",
            &["male,group B,some college,standard,none,52,55,50"],
        );

        let store = ArtifactStore::new(dir.path().join("artifacts"));
        let data = DataTransformation::new(store.clone())
            .execute(&train, &test)
            .unwrap();

        assert_eq!(data.x_train.nrows(), 3);
        assert_eq!(data.x_test.nrows(), 1);
        assert_eq!(data.x_train.ncols(), data.x_test.ncols());
        assert_eq!(data.y_train.len(), 3);
        assert_eq!(data.y_test.len(), 1);
        assert!(store.exists(PREPROCESSOR_FILE));
    }

    #[test]
    fn test_missing_target_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let train = write_csv(
            dir.path(),
            "train.csv",
            &["female,group A,some college,standard,none,,70,72"],
        );
        let test = write_csv(
            dir.path(),
            "test.csv",
            &["male,group B,some college,standard,none,52,55,50"],
        );

        let store = ArtifactStore::new(dir.path().join("artifacts"));
        let err = DataTransformation::new(store)
            .execute(&train, &test)
            .unwrap_err();
        assert!(err.to_string().contains("missing the 'math_score' target"));
    }
}
