use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json, Router};
use launchwise::assessments::{assessment_router, AssessmentService};
use launchwise::backend::BackendClient;
use launchwise::content::{content_router, ContentService};
use launchwise::newsletter::{newsletter_router, NewsletterService};
use serde_json::json;
use std::sync::Arc;

/// Services mounted under `/api/v1`, all sharing one backend client.
pub(crate) struct SiteServices<B> {
    pub(crate) assessments: Arc<AssessmentService<B>>,
    pub(crate) newsletter: Arc<NewsletterService<B>>,
    pub(crate) content: Arc<ContentService<B>>,
}

pub(crate) fn with_site_routes<B>(services: SiteServices<B>) -> Router
where
    B: BackendClient + 'static,
{
    assessment_router(services.assessments)
        .merge(newsletter_router(services.newsletter))
        .merge(content_router(services.content))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::seed_articles;
    use launchwise::backend::MemoryBackend;
    use launchwise::config::AssessmentSettings;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn site() -> (Router, Arc<AtomicBool>) {
        let backend = Arc::new(MemoryBackend::new());
        seed_articles(&backend).expect("seeds");
        let readiness = Arc::new(AtomicBool::new(false));
        let state = AppState {
            readiness: readiness.clone(),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let router = with_site_routes(SiteServices {
            assessments: Arc::new(AssessmentService::new(
                backend.clone(),
                AssessmentSettings::default(),
            )),
            newsletter: Arc::new(NewsletterService::new(backend.clone())),
            content: Arc::new(ContentService::new(backend)),
        })
        .layer(Extension(state));
        (router, readiness)
    }

    async fn get(router: Router, uri: &str) -> axum::response::Response {
        router
            .oneshot(
                axum::http::Request::get(uri)
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn readiness_follows_the_shared_flag() {
        let (router, readiness) = site();

        let before = get(router.clone(), "/ready").await;
        assert_eq!(before.status(), StatusCode::SERVICE_UNAVAILABLE);

        readiness.store(true, Ordering::Release);
        let after = get(router, "/ready").await;
        assert_eq!(after.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn every_site_router_is_mounted() {
        let (router, _) = site();

        assert_eq!(get(router.clone(), "/api/v1/tools").await.status(), StatusCode::OK);
        assert_eq!(
            get(router.clone(), "/api/v1/tools/customer-plan").await.status(),
            StatusCode::OK
        );
        assert_eq!(
            get(router.clone(), "/api/v1/articles?category=launch").await.status(),
            StatusCode::OK
        );
        assert_eq!(
            get(router.clone(), "/api/v1/articles/launch-week-checklist")
                .await
                .status(),
            StatusCode::OK
        );
        assert_eq!(get(router, "/metrics").await.status(), StatusCode::OK);
    }
}
