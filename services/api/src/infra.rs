use chrono::{TimeZone, Utc};
use launchwise::backend::{self, BackendClient, BackendError, MemoryBackend, ARTICLES_TABLE};
use launchwise::content::Article;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Starter articles so the public listing is not empty on a fresh process.
pub(crate) fn seed_articles(store: &MemoryBackend) -> Result<usize, BackendError> {
    let articles = [
        (
            "validate-before-you-build",
            "Validate before you build",
            "validation",
            "Five conversations that tell you more than five weeks of coding.",
            (2026, 1, 12),
        ),
        (
            "pricing-your-first-product",
            "Pricing your first product",
            "pricing",
            "Why your first price should make you slightly nervous.",
            (2026, 2, 9),
        ),
        (
            "launch-week-checklist",
            "The launch week checklist",
            "launch",
            "What to line up before you press publish.",
            (2026, 3, 16),
        ),
    ];

    let mut seeded = 0;
    for (slug, title, category, excerpt, (year, month, day)) in articles {
        let article = Article {
            slug: slug.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            excerpt: excerpt.to_string(),
            body: excerpt.to_string(),
            published: true,
            published_at: Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).single(),
            view_count: 0,
        };
        store.insert(ARTICLES_TABLE, backend::to_row(&article)?)?;
        seeded += 1;
    }
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchwise::content::ContentService;

    #[test]
    fn seeded_articles_are_listed_newest_first() {
        let backend = Arc::new(MemoryBackend::new());
        assert_eq!(seed_articles(&backend).expect("seeds"), 3);

        let listed = ContentService::new(backend)
            .list_published(None)
            .expect("lists");
        let slugs: Vec<_> = listed.iter().map(|article| article.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec![
                "launch-week-checklist",
                "pricing-your-first-product",
                "validate-before-you-build",
            ]
        );
    }

    #[test]
    fn seeding_twice_conflicts_on_slug() {
        let backend = MemoryBackend::new();
        seed_articles(&backend).expect("seeds");

        assert!(matches!(
            seed_articles(&backend),
            Err(BackendError::Conflict)
        ));
    }
}
