use crate::cli::ServeArgs;
use crate::infra::{seed_articles, AppState};
use crate::routes::{with_site_routes, SiteServices};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use launchwise::assessments::AssessmentService;
use launchwise::backend::MemoryBackend;
use launchwise::config::AppConfig;
use launchwise::content::ContentService;
use launchwise::error::AppError;
use launchwise::newsletter::NewsletterService;
use launchwise::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let backend = Arc::new(MemoryBackend::new());
    match seed_articles(&backend) {
        Ok(count) => info!(count, "seeded starter articles"),
        Err(err) => warn!(error = %err, "failed to seed starter articles"),
    }

    let services = SiteServices {
        assessments: Arc::new(AssessmentService::new(
            backend.clone(),
            config.assessments,
        )),
        newsletter: Arc::new(NewsletterService::new(backend.clone())),
        content: Arc::new(ContentService::new(backend)),
    };

    let app = with_site_routes(services)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        store_submissions = config.assessments.store_submissions,
        "launchwise api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
