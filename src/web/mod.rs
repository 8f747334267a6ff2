// ============================================================
// Layer 1 — Web / Presentation Layer
// ============================================================
// A minimal HTML front-end over the prediction use case,
// built with axum:
//
//   GET  /            — landing page
//   GET  /predictdata — blank prediction form
//   POST /predictdata — score the submitted form and show the
//                       result above the form
//
// The server shares one predictor behind Arc. Artifacts are
// re-read per request inside the predictor, so retraining
// takes effect without a restart.
//
// Reference: Rust Book §20 (Building a Web Server)

pub mod handlers;
pub mod pages;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::domain::traits::ScorePredictor;
use crate::error::{Result, Stage};
use crate::infra::artifact_store::ArtifactStore;
use crate::ml::predictor::Predictor;
use crate::stage_err;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn ScorePredictor>,
}

/// Build the application router over any predictor.
pub fn router(predictor: Arc<dyn ScorePredictor>) -> Router {
    let state = AppState { predictor };
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/predictdata",
            get(handlers::predict_form).post(handlers::predict_submit),
        )
        .with_state(state)
}

/// Bind and serve until the process is stopped. Blocking; the
/// async runtime lives entirely inside this function so the
/// rest of the crate stays synchronous.
pub fn serve(host: &str, port: u16, artifacts_dir: &str) -> Result<()> {
    let predictor: Arc<dyn ScorePredictor> =
        Arc::new(Predictor::new(ArtifactStore::new(artifacts_dir)));
    let app = router(predictor);

    let addr = format!("{host}:{port}");
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            stage_err!(Stage::Server, "cannot build async runtime: {e}")
        })?;

    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
            stage_err!(Stage::Server, "cannot bind '{addr}': {e}")
        })?;
        info!("listening on http://{addr}");
        axum::serve(listener, app)
            .await
            .map_err(|e| stage_err!(Stage::Server, "server error: {e}"))
    })
}
