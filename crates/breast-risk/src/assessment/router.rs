use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::answers::QuizAnswers;
use super::catalog;
use super::repository::{ReportHistoryView, ReportId, ReportRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};

/// Body accepted by the assessment and score endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub answers: QuizAnswers,
}

/// Router builder exposing risk assessment endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: ReportRepository + 'static,
{
    Router::new()
        .route("/api/v1/risk/assessments", post(assess_handler::<R>))
        .route(
            "/api/v1/risk/assessments/:report_id",
            get(report_handler::<R>),
        )
        .route(
            "/api/v1/risk/owners/:owner/assessments",
            get(history_handler::<R>),
        )
        .route("/api/v1/risk/score", post(score_handler::<R>))
        .route("/api/v1/risk/catalog", get(catalog_handler))
        .with_state(service)
}

pub(crate) async fn assess_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match service.assess(request.owner, request.answers) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(AssessmentServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "report already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(report_id): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
{
    let id = ReportId(report_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "report_id": id.0,
                "error": "report not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(owner): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match service.history(&owner) {
        Ok(records) => {
            let views: Vec<ReportHistoryView> =
                records.iter().map(|record| record.history_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response
where
    R: ReportRepository + 'static,
{
    let preview = service.preview(&request.answers);
    (StatusCode::OK, axum::Json(preview)).into_response()
}

pub(crate) async fn catalog_handler() -> Response {
    (StatusCode::OK, axum::Json(catalog::entries())).into_response()
}

fn internal_error(error: AssessmentServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
