use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::{ContentError, ContentService};
use crate::backend::BackendClient;

#[derive(Debug, Default, Deserialize)]
pub struct ArticleQuery {
    pub category: Option<String>,
}

pub fn content_router<B>(service: Arc<ContentService<B>>) -> Router
where
    B: BackendClient + 'static,
{
    Router::new()
        .route("/api/v1/articles", get(list_handler::<B>))
        .route("/api/v1/articles/:slug", get(article_handler::<B>))
        .with_state(service)
}

pub(crate) async fn list_handler<B>(
    State(service): State<Arc<ContentService<B>>>,
    Query(query): Query<ArticleQuery>,
) -> Response
where
    B: BackendClient + 'static,
{
    match service.list_published(query.category.as_deref()) {
        Ok(articles) => (StatusCode::OK, axum::Json(articles)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn article_handler<B>(
    State(service): State<Arc<ContentService<B>>>,
    Path(slug): Path<String>,
) -> Response
where
    B: BackendClient + 'static,
{
    match service.get(&slug) {
        Ok(article) => (StatusCode::OK, axum::Json(article)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(error: ContentError) -> Response {
    let status = match &error {
        ContentError::NotFound(_) => StatusCode::NOT_FOUND,
        ContentError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, axum::Json(json!({ "error": error.to_string() }))).into_response()
}
