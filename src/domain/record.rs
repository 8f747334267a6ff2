// ============================================================
// Layer 3 — Student Record Domain Type
// ============================================================
// Represents a single student's row of the dataset.
// This is a plain data struct with no behaviour beyond
// schema-ordered field access.
//
// Every field is an Option because raw CSV data may have
// missing cells — filling them in (imputation) is the
// transformer's job, not the loader's. The target column is
// also optional since test/inference records may not carry it.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

use crate::domain::schema::{CATEGORICAL_COLUMNS, NUMERIC_COLUMNS};

/// One student's raw attributes and scores.
///
/// Field order matches the CSV header of the dataset:
/// five categorical attributes, two numeric scores, and the
/// optional math-score target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentRecord {
    pub gender:                      Option<String>,
    pub race_ethnicity:              Option<String>,
    pub parental_level_of_education: Option<String>,
    pub lunch:                       Option<String>,
    pub test_preparation_course:     Option<String>,
    pub reading_score:               Option<f64>,
    pub writing_score:               Option<f64>,
    pub math_score:                  Option<f64>,
}

impl StudentRecord {
    /// Build a fully-specified record without a target — the shape
    /// arriving from the web form or the `predict` command.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        gender:                      impl Into<String>,
        race_ethnicity:              impl Into<String>,
        parental_level_of_education: impl Into<String>,
        lunch:                       impl Into<String>,
        test_preparation_course:     impl Into<String>,
        reading_score:               f64,
        writing_score:               f64,
    ) -> Self {
        Self {
            gender:                      Some(gender.into()),
            race_ethnicity:              Some(race_ethnicity.into()),
            parental_level_of_education: Some(parental_level_of_education.into()),
            lunch:                       Some(lunch.into()),
            test_preparation_course:     Some(test_preparation_course.into()),
            reading_score:               Some(reading_score),
            writing_score:               Some(writing_score),
            math_score:                  None,
        }
    }

    /// Numeric field by `schema::NUMERIC_COLUMNS` index.
    pub fn numeric(&self, idx: usize) -> Option<f64> {
        match NUMERIC_COLUMNS[idx] {
            "reading_score" => self.reading_score,
            "writing_score" => self.writing_score,
            other => unreachable!("unknown numeric column '{other}'"),
        }
    }

    /// Categorical field by `schema::CATEGORICAL_COLUMNS` index.
    pub fn categorical(&self, idx: usize) -> Option<&str> {
        let field = match CATEGORICAL_COLUMNS[idx] {
            "gender"                      => &self.gender,
            "race_ethnicity"              => &self.race_ethnicity,
            "parental_level_of_education" => &self.parental_level_of_education,
            "lunch"                       => &self.lunch,
            "test_preparation_course"     => &self.test_preparation_course,
            other => unreachable!("unknown categorical column '{other}'"),
        };
        field.as_deref()
    }
}
