// ============================================================
// Layer 5 — Candidate Model Catalogue
// ============================================================
// The fixed list of model families the trainer searches over,
// each with a hyper-parameter grid for cross-validated tuning.
//
// Families and grids:
//
//   Linear Regression — no hyper-parameters, fit as-is
//   Ridge             — alpha ∈ {0.01, 0.1, 1, 10, 100}
//   Lasso             — alpha ∈ {0.001, 0.01, 0.1, 1}
//   Elastic Net       — alpha ∈ {0.01, 0.1, 1}
//                       × l1_ratio ∈ {0.2, 0.5, 0.8}
//   K-Neighbors       — k ∈ {5, 7, 9, 11}
//   Decision Tree     — max_depth ∈ {4, 6, 8, 10, 12}
//   Random Forest     — n_trees ∈ {8, 16, 32, 64, 128, 256}
//
// An empty grid means the default configuration is used
// directly, with no cross-validation sweep.
//
// Reference: Rust Book §6 (Enums)

use crate::ml::models::ModelConfig;

/// One family in the catalogue: a display name, the default
/// configuration, and the grid of candidates to tune over.
#[derive(Debug, Clone)]
pub struct ModelSpec {
    pub name:    &'static str,
    pub default: ModelConfig,
    pub grid:    Vec<ModelConfig>,
}

/// Build the full candidate catalogue.
pub fn catalogue() -> Vec<ModelSpec> {
    vec![
        ModelSpec {
            name:    "Linear Regression",
            default: ModelConfig::LinearRegression,
            grid:    vec![],
        },
        ModelSpec {
            name:    "Ridge",
            default: ModelConfig::Ridge { alpha: 1.0 },
            grid:    [0.01, 0.1, 1.0, 10.0, 100.0]
                .iter()
                .map(|&alpha| ModelConfig::Ridge { alpha })
                .collect(),
        },
        ModelSpec {
            name:    "Lasso",
            default: ModelConfig::Lasso { alpha: 1.0 },
            grid:    [0.001, 0.01, 0.1, 1.0]
                .iter()
                .map(|&alpha| ModelConfig::Lasso { alpha })
                .collect(),
        },
        ModelSpec {
            name:    "Elastic Net",
            default: ModelConfig::ElasticNet { alpha: 1.0, l1_ratio: 0.5 },
            grid:    [0.01, 0.1, 1.0]
                .iter()
                .flat_map(|&alpha| {
                    [0.2, 0.5, 0.8].iter().map(move |&l1_ratio| {
                        ModelConfig::ElasticNet { alpha, l1_ratio }
                    })
                })
                .collect(),
        },
        ModelSpec {
            name:    "K-Neighbors Regressor",
            default: ModelConfig::KNeighbors { k: 5 },
            grid:    [5, 7, 9, 11]
                .iter()
                .map(|&k| ModelConfig::KNeighbors { k })
                .collect(),
        },
        ModelSpec {
            name:    "Decision Tree",
            default: ModelConfig::DecisionTree { max_depth: 8 },
            grid:    [4, 6, 8, 10, 12]
                .iter()
                .map(|&max_depth| ModelConfig::DecisionTree { max_depth })
                .collect(),
        },
        ModelSpec {
            name:    "Random Forest",
            default: ModelConfig::RandomForest { n_trees: 32 },
            grid:    [8, 16, 32, 64, 128, 256]
                .iter()
                .map(|&n_trees| ModelConfig::RandomForest { n_trees })
                .collect(),
        },
    ]
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_has_seven_families_with_unique_names() {
        let specs = catalogue();
        assert_eq!(specs.len(), 7);

        let mut names: Vec<&str> = specs.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn test_only_linear_regression_has_an_empty_grid() {
        for spec in catalogue() {
            if spec.name == "Linear Regression" {
                assert!(spec.grid.is_empty());
            } else {
                assert!(!spec.grid.is_empty(), "{} grid is empty", spec.name);
            }
        }
    }

    #[test]
    fn test_elastic_net_grid_is_a_full_cross_product() {
        let specs = catalogue();
        let en = specs.iter().find(|s| s.name == "Elastic Net").unwrap();
        assert_eq!(en.grid.len(), 9);
    }
}
