// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `train`, `predict`, `serve`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::train_use_case::TrainConfig;
use crate::domain::record::StudentRecord;

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the regression pipeline on the student CSV
    Train(TrainArgs),

    /// Predict one student's math score from the saved artifacts
    Predict(PredictArgs),

    /// Start the prediction web form
    Serve(ServeArgs),
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Path to the raw student performance CSV
    #[arg(long, default_value = "data/stud.csv")]
    pub data_path: String,

    /// Directory for trained artifacts (preprocessor, model, report)
    #[arg(long, default_value = "artifacts")]
    pub artifacts_dir: String,

    /// Fraction of rows held out as the test split
    #[arg(long, default_value_t = 0.2)]
    pub test_fraction: f64,

    /// Shuffle seed for the train/test split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            data_path:     a.data_path,
            artifacts_dir: a.artifacts_dir,
            test_fraction: a.test_fraction,
            seed:          a.seed,
        }
    }
}

/// All arguments for the `predict` command — one flag per
/// input column of the model.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Student's gender (e.g. "female", "male")
    #[arg(long)]
    pub gender: String,

    /// Race/ethnicity group (e.g. "group B")
    #[arg(long)]
    pub race_ethnicity: String,

    /// Parental level of education (e.g. "bachelor's degree")
    #[arg(long)]
    pub parental_level_of_education: String,

    /// Lunch type (e.g. "standard", "free/reduced")
    #[arg(long)]
    pub lunch: String,

    /// Test preparation course (e.g. "none", "completed")
    #[arg(long)]
    pub test_preparation_course: String,

    /// Reading score (0-100)
    #[arg(long)]
    pub reading_score: f64,

    /// Writing score (0-100)
    #[arg(long)]
    pub writing_score: f64,

    /// Directory where artifacts were saved during training
    #[arg(long, default_value = "artifacts")]
    pub artifacts_dir: String,
}

impl PredictArgs {
    /// Build the domain record the predictor scores.
    pub fn to_record(&self) -> StudentRecord {
        StudentRecord::new(
            self.gender.clone(),
            self.race_ethnicity.clone(),
            self.parental_level_of_education.clone(),
            self.lunch.clone(),
            self.test_preparation_course.clone(),
            self.reading_score,
            self.writing_score,
        )
    }
}

/// All arguments for the `serve` command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind the web server to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Directory where artifacts were saved during training
    #[arg(long, default_value = "artifacts")]
    pub artifacts_dir: String,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_args_build_a_record_without_a_target() {
        let args = PredictArgs {
            gender:                      "female".into(),
            race_ethnicity:              "group B".into(),
            parental_level_of_education: "bachelor's degree".into(),
            lunch:                       "standard".into(),
            test_preparation_course:     "none".into(),
            reading_score:               72.0,
            writing_score:               74.0,
            artifacts_dir:               "artifacts".into(),
        };

        let record = args.to_record();
        assert_eq!(record.gender.as_deref(), Some("female"));
        assert_eq!(record.reading_score, Some(72.0));
        assert_eq!(record.math_score, None);
    }
}
