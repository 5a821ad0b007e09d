use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::service::{
    AssessmentRequest, AssessmentService, AssessmentServiceError, SubmissionSummary,
};
use super::tools::ToolKind;
use crate::backend::BackendClient;

/// Router exposing the tool catalogue and evaluation endpoints.
pub fn assessment_router<B>(service: Arc<AssessmentService<B>>) -> Router
where
    B: BackendClient + 'static,
{
    Router::new()
        .route("/api/v1/tools", get(list_handler))
        .route("/api/v1/tools/:tool", get(definition_handler::<B>))
        .route("/api/v1/tools/:tool/evaluate", post(evaluate_handler::<B>))
        .route(
            "/api/v1/tools/:tool/submissions",
            get(submissions_handler::<B>),
        )
        .with_state(service)
}

pub(crate) async fn list_handler() -> Response {
    let tools: Vec<_> = ToolKind::ALL.into_iter().map(ToolKind::summary).collect();
    (StatusCode::OK, axum::Json(tools)).into_response()
}

pub(crate) async fn definition_handler<B>(
    State(service): State<Arc<AssessmentService<B>>>,
    Path(tool): Path<String>,
) -> Response
where
    B: BackendClient + 'static,
{
    match service.resolve(&tool) {
        Ok(kind) => (StatusCode::OK, axum::Json(kind.definition())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn evaluate_handler<B>(
    State(service): State<Arc<AssessmentService<B>>>,
    Path(tool): Path<String>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response
where
    B: BackendClient + 'static,
{
    let outcome = service
        .resolve(&tool)
        .and_then(|kind| service.run(kind, request));

    match outcome {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn submissions_handler<B>(
    State(service): State<Arc<AssessmentService<B>>>,
    Path(tool): Path<String>,
) -> Response
where
    B: BackendClient + 'static,
{
    let outcome = service
        .resolve(&tool)
        .and_then(|kind| service.submissions(kind));

    match outcome {
        Ok(records) => {
            let summaries: Vec<SubmissionSummary> =
                records.into_iter().map(SubmissionSummary::from).collect();
            (StatusCode::OK, axum::Json(summaries)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::UnknownTool(_) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Answers(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
