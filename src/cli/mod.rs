// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `train`   — runs the full training pipeline on the CSV
//   2. `predict` — scores a single student from flag values
//   3. `serve`   — starts the web form for predictions
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PredictArgs, ServeArgs, TrainArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "math-score-predictor",
    version = "0.1.0",
    about = "Train a math score regression pipeline on student performance data, \
             then predict scores from the CLI or a web form."
)]
pub struct Cli {
    /// The subcommand to run (train, predict, or serve)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args)   => Self::run_train(args),
            Commands::Predict(args) => Self::run_predict(args),
            Commands::Serve(args)   => Self::run_serve(args),
        }
    }

    /// Handles the `train` subcommand.
    /// Converts CLI args into a TrainConfig and hands off to Layer 2.
    fn run_train(args: TrainArgs) -> Result<()> {
        use crate::application::train_use_case::TrainUseCase;

        tracing::info!("Starting training on data in: {}", args.data_path);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = TrainUseCase::new(args.into());
        let outcome  = use_case.execute()?;

        println!(
            "Training complete. Best model: {} (R² = {:.4}). Artifacts saved.",
            outcome.best_model, outcome.r2
        );
        Ok(())
    }

    /// Handles the `predict` subcommand.
    /// Builds a record from the flags and prints the predicted score.
    fn run_predict(args: PredictArgs) -> Result<()> {
        use crate::application::predict_use_case::PredictUseCase;

        let use_case = PredictUseCase::new(&args.artifacts_dir);
        let record   = args.to_record();
        let score    = use_case.execute(&record)?;

        println!("\nPredicted math score: {:.2}", score);
        Ok(())
    }

    /// Handles the `serve` subcommand.
    /// Starts the prediction web form on the given address.
    fn run_serve(args: ServeArgs) -> Result<()> {
        println!("Serving predictions on http://{}:{}", args.host, args.port);
        crate::web::serve(&args.host, args.port, &args.artifacts_dir)?;
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_consumes_the_cli_and_dispatches_the_subcommand() {
        // An empty artifacts dir makes predict fail AFTER dispatch,
        // proving run(self) hands the parsed args to the right arm.
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "math-score-predictor",
            "predict",
            "--gender", "female",
            "--race-ethnicity", "group B",
            "--parental-level-of-education", "bachelor's degree",
            "--lunch", "standard",
            "--test-preparation-course", "none",
            "--reading-score", "72.0",
            "--writing-score", "74.0",
            "--artifacts-dir", dir.path().to_str().unwrap(),
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Predict(_)));

        let err = cli.run().unwrap_err();
        assert!(err.to_string().contains("Have you run 'train' first?"));
    }
}
