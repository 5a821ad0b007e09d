//! End-to-end checks for the newsletter signup flow and the public article listing.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use launchwise::backend::{
    BackendClient, Filter, MemoryBackend, ARTICLES_TABLE, SUBSCRIBERS_TABLE,
};
use launchwise::content::{content_router, ContentService};
use launchwise::newsletter::{newsletter_router, NewsletterService};

fn site(backend: Arc<MemoryBackend>) -> Router {
    Router::new()
        .merge(newsletter_router(Arc::new(NewsletterService::new(
            backend.clone(),
        ))))
        .merge(content_router(Arc::new(ContentService::new(backend))))
}

async fn send(router: Router, request: axum::http::Request<axum::body::Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("route executes");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let payload = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json payload")
    };
    (status, payload)
}

fn signup(email: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post("/api/v1/newsletter")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&json!({ "email": email, "source": "article-footer" })).unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
async fn newsletter_signup_lifecycle() {
    let backend = Arc::new(MemoryBackend::new());
    let router = site(backend.clone());

    let (created, payload) = send(router.clone(), signup("Reader@Example.org")).await;
    assert_eq!(created, StatusCode::CREATED);
    assert_eq!(payload["email"], json!("reader@example.org"));

    let (duplicate, _) = send(router.clone(), signup("reader@example.org")).await;
    assert_eq!(duplicate, StatusCode::CONFLICT);

    let (invalid, _) = send(router.clone(), signup("reader@example")).await;
    assert_eq!(invalid, StatusCode::UNPROCESSABLE_ENTITY);

    let removal = axum::http::Request::delete("/api/v1/newsletter/reader@example.org")
        .body(axum::body::Body::empty())
        .unwrap();
    let (removed, _) = send(router, removal).await;
    assert_eq!(removed, StatusCode::NO_CONTENT);

    let remaining = backend
        .select(SUBSCRIBERS_TABLE, &Filter::new())
        .expect("select");
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn article_listing_hides_drafts_and_counts_views() {
    let backend = Arc::new(MemoryBackend::new());
    for (slug, category, published_at) in [
        ("first-ten-customers", "growth", Some("2026-04-01T08:00:00Z")),
        ("pricing-page", "growth", Some("2026-05-12T08:00:00Z")),
        ("unfinished", "growth", None),
    ] {
        let row = json!({
            "slug": slug,
            "title": slug.replace('-', " "),
            "category": category,
            "excerpt": "",
            "body": "Body",
            "published": published_at.is_some(),
            "published_at": published_at,
        });
        let Value::Object(row) = row else {
            unreachable!("json object literal")
        };
        backend.insert(ARTICLES_TABLE, row).expect("seed");
    }
    let router = site(backend);

    let list = axum::http::Request::get("/api/v1/articles?category=growth")
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, payload) = send(router.clone(), list).await;
    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<_> = payload
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|article| article["slug"].as_str())
        .collect();
    assert_eq!(slugs, vec!["pricing-page", "first-ten-customers"]);

    let fetch = axum::http::Request::get("/api/v1/articles/pricing-page")
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, payload) = send(router.clone(), fetch).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["view_count"], json!(1));

    let draft = axum::http::Request::get("/api/v1/articles/unfinished")
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, _) = send(router, draft).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
