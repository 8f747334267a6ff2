// ============================================================
// Layer 5 — Model Configurations and Regressors
// ============================================================
// The single place where smartcore types appear. Two enums:
//
//   ModelConfig — an UNFIT candidate: a model family plus its
//                 hyper-parameters. Cheap to clone, what the
//                 grid search enumerates.
//
//   Regressor   — a FITTED model, one variant per family.
//                 Serde-serializable, so the winner can be
//                 written to model.bin and reloaded at
//                 inference time.
//
// Both enums must stay in lock-step: every config variant has
// exactly one fitted counterpart.
//
// Feature matrices arrive as ndarray Array2 from the data
// layer and are converted to smartcore's DenseMatrix at the
// boundary here.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)
//            Rust Book §10 (Traits)

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use smartcore::{
    ensemble::random_forest_regressor::{
        RandomForestRegressor, RandomForestRegressorParameters,
    },
    linalg::basic::matrix::DenseMatrix,
    linear::{
        elastic_net::{ElasticNet, ElasticNetParameters},
        lasso::{Lasso, LassoParameters},
        linear_regression::{LinearRegression, LinearRegressionParameters},
        ridge_regression::{RidgeRegression, RidgeRegressionParameters},
    },
    metrics::distance::euclidian::Euclidian,
    neighbors::knn_regressor::{KNNRegressor, KNNRegressorParameters},
    tree::decision_tree_regressor::{
        DecisionTreeRegressor, DecisionTreeRegressorParameters,
    },
};

use crate::error::{Result, Stage};
use crate::stage_err;

/// A model family with concrete hyper-parameters, ready to fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModelConfig {
    LinearRegression,
    Ridge { alpha: f64 },
    Lasso { alpha: f64 },
    ElasticNet { alpha: f64, l1_ratio: f64 },
    KNeighbors { k: usize },
    DecisionTree { max_depth: u16 },
    RandomForest { n_trees: u16 },
}

impl ModelConfig {
    /// Fit this configuration on a training matrix.
    pub fn fit(&self, x: &Array2<f64>, y: &Array1<f64>) -> Result<Regressor> {
        let x = to_dense(x);
        let y = y.to_vec();

        let fitted = match *self {
            Self::LinearRegression => Regressor::LinearRegression(
                LinearRegression::fit(&x, &y, LinearRegressionParameters::default())
                    .map_err(fit_err)?,
            ),
            Self::Ridge { alpha } => Regressor::Ridge(
                RidgeRegression::fit(
                    &x,
                    &y,
                    RidgeRegressionParameters::default().with_alpha(alpha),
                )
                .map_err(fit_err)?,
            ),
            Self::Lasso { alpha } => Regressor::Lasso(
                Lasso::fit(&x, &y, LassoParameters::default().with_alpha(alpha))
                    .map_err(fit_err)?,
            ),
            Self::ElasticNet { alpha, l1_ratio } => Regressor::ElasticNet(
                ElasticNet::fit(
                    &x,
                    &y,
                    ElasticNetParameters::default()
                        .with_alpha(alpha)
                        .with_l1_ratio(l1_ratio),
                )
                .map_err(fit_err)?,
            ),
            Self::KNeighbors { k } => {
                let params: KNNRegressorParameters<f64, Euclidian<f64>> =
                    KNNRegressorParameters::default().with_k(k);
                Regressor::KNeighbors(
                    KNNRegressor::fit(&x, &y, params).map_err(fit_err)?,
                )
            }
            Self::DecisionTree { max_depth } => Regressor::DecisionTree(
                DecisionTreeRegressor::fit(
                    &x,
                    &y,
                    DecisionTreeRegressorParameters::default()
                        .with_max_depth(max_depth),
                )
                .map_err(fit_err)?,
            ),
            Self::RandomForest { n_trees } => Regressor::RandomForest(
                RandomForestRegressor::fit(
                    &x,
                    &y,
                    RandomForestRegressorParameters::default()
                        .with_n_trees(n_trees.into()),
                )
                .map_err(fit_err)?,
            ),
        };
        Ok(fitted)
    }
}

impl std::fmt::Display for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LinearRegression => write!(f, "LinearRegression"),
            Self::Ridge { alpha } => write!(f, "Ridge(alpha={alpha})"),
            Self::Lasso { alpha } => write!(f, "Lasso(alpha={alpha})"),
            Self::ElasticNet { alpha, l1_ratio } => {
                write!(f, "ElasticNet(alpha={alpha}, l1_ratio={l1_ratio})")
            }
            Self::KNeighbors { k } => write!(f, "KNeighbors(k={k})"),
            Self::DecisionTree { max_depth } => {
                write!(f, "DecisionTree(max_depth={max_depth})")
            }
            Self::RandomForest { n_trees } => {
                write!(f, "RandomForest(n_trees={n_trees})")
            }
        }
    }
}

type KnnModel =
    KNNRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>, Euclidian<f64>>;

/// A fitted regressor. Serialized as-is into model.bin.
#[derive(Debug, Serialize, Deserialize)]
pub enum Regressor {
    LinearRegression(LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>),
    Ridge(RidgeRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>),
    Lasso(Lasso<f64, f64, DenseMatrix<f64>, Vec<f64>>),
    ElasticNet(ElasticNet<f64, f64, DenseMatrix<f64>, Vec<f64>>),
    KNeighbors(KnnModel),
    DecisionTree(DecisionTreeRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>),
    RandomForest(RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>),
}

impl Regressor {
    /// Predict targets for every row of the feature matrix.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let x = to_dense(x);
        let predictions = match self {
            Self::LinearRegression(m) => m.predict(&x),
            Self::Ridge(m) => m.predict(&x),
            Self::Lasso(m) => m.predict(&x),
            Self::ElasticNet(m) => m.predict(&x),
            Self::KNeighbors(m) => m.predict(&x),
            Self::DecisionTree(m) => m.predict(&x),
            Self::RandomForest(m) => m.predict(&x),
        }
        .map_err(|e| stage_err!(Stage::Inference, "prediction failed: {e}"))?;
        Ok(Array1::from_vec(predictions))
    }
}

/// Convert an ndarray matrix into smartcore's row-major
/// DenseMatrix at the framework boundary.
fn to_dense(x: &Array2<f64>) -> DenseMatrix<f64> {
    let rows: Vec<Vec<f64>> = x.rows().into_iter().map(|r| r.to_vec()).collect();
    DenseMatrix::from_2d_vec(&rows)
}

fn fit_err(e: smartcore::error::Failed) -> crate::error::PipelineError {
    stage_err!(Stage::Training, "model fit failed: {e}")
}
