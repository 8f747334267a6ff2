// ============================================================
// Layer 1 — Web Handlers
// ============================================================
// The three route handlers plus the form-to-record boundary.
// Handlers stay thin: decode the form, call the predictor,
// render a page. Pipeline errors surface as a 500 with the
// error text on an HTML page.
//
// Reference: Rust Book §20 (Building a Web Server)

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::{error, info};

use crate::domain::record::StudentRecord;
use crate::error::PipelineError;
use crate::web::{pages, AppState};

/// Landing page.
pub async fn index() -> Html<String> {
    Html(pages::index_page())
}

/// Blank prediction form.
pub async fn predict_form() -> Html<String> {
    Html(pages::form_page(None))
}

/// Score a submitted form and re-render it with the result.
pub async fn predict_submit(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> Result<Html<String>, ServerError> {
    let record = StudentRecord::from(form);
    let score = state.predictor.predict(&record)?;
    info!(score, "served web prediction");
    Ok(Html(pages::form_page(Some(score))))
}

/// The POSTed form fields, matching the input names on the
/// prediction page one-to-one.
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    pub gender:                      String,
    pub race_ethnicity:              String,
    pub parental_level_of_education: String,
    pub lunch:                       String,
    pub test_preparation_course:     String,
    pub reading_score:               f64,
    pub writing_score:               f64,
}

impl From<PredictForm> for StudentRecord {
    fn from(f: PredictForm) -> Self {
        StudentRecord::new(
            f.gender,
            f.race_ethnicity,
            f.parental_level_of_education,
            f.lunch,
            f.test_preparation_course,
            f.reading_score,
            f.writing_score,
        )
    }
}

/// Pipeline errors rendered as an HTML error page.
pub struct ServerError(PipelineError);

impl From<PipelineError> for ServerError {
    fn from(e: PipelineError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(pages::error_page(&self.0.to_string())),
        )
            .into_response()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_converts_to_a_record_without_a_target() {
        let form = PredictForm {
            gender:                      "female".into(),
            race_ethnicity:              "group B".into(),
            parental_level_of_education: "bachelor's degree".into(),
            lunch:                       "standard".into(),
            test_preparation_course:     "none".into(),
            reading_score:               72.0,
            writing_score:               74.0,
        };

        let record = StudentRecord::from(form);
        assert_eq!(record.lunch.as_deref(), Some("standard"));
        assert_eq!(record.writing_score, Some(74.0));
        assert_eq!(record.math_score, None);
    }
}
