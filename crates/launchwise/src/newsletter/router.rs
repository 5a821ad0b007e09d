use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, post},
    Router,
};
use serde_json::json;

use super::domain::SubscribeRequest;
use super::service::{NewsletterError, NewsletterService};
use crate::backend::BackendClient;

pub fn newsletter_router<B>(service: Arc<NewsletterService<B>>) -> Router
where
    B: BackendClient + 'static,
{
    Router::new()
        .route("/api/v1/newsletter", post(subscribe_handler::<B>))
        .route("/api/v1/newsletter/:email", delete(unsubscribe_handler::<B>))
        .with_state(service)
}

pub(crate) async fn subscribe_handler<B>(
    State(service): State<Arc<NewsletterService<B>>>,
    axum::Json(request): axum::Json<SubscribeRequest>,
) -> Response
where
    B: BackendClient + 'static,
{
    match service.subscribe(request) {
        Ok(subscriber) => (StatusCode::CREATED, axum::Json(subscriber)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn unsubscribe_handler<B>(
    State(service): State<Arc<NewsletterService<B>>>,
    Path(email): Path<String>,
) -> Response
where
    B: BackendClient + 'static,
{
    match service.unsubscribe(&email) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(error: NewsletterError) -> Response {
    let status = match &error {
        NewsletterError::InvalidEmail(_) => StatusCode::UNPROCESSABLE_ENTITY,
        NewsletterError::AlreadySubscribed(_) => StatusCode::CONFLICT,
        NewsletterError::NotSubscribed(_) => StatusCode::NOT_FOUND,
        NewsletterError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, axum::Json(json!({ "error": error.to_string() }))).into_response()
}
