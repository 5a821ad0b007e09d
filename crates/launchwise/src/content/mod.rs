//! Published articles: category listing and slug lookup with view counting.

pub mod router;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::backend::{self, BackendClient, BackendError, Filter, Row, SortOrder, ARTICLES_TABLE};

pub use router::content_router;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub body: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub view_count: u64,
}

/// Listing entry without the article body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleSummary {
    fn from(article: Article) -> Self {
        Self {
            slug: article.slug,
            title: article.title,
            category: article.category,
            excerpt: article.excerpt,
            published_at: article.published_at,
        }
    }
}

pub struct ContentService<B> {
    backend: Arc<B>,
}

impl<B> ContentService<B>
where
    B: BackendClient + 'static,
{
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Published articles, newest first, optionally narrowed to one category.
    pub fn list_published(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<ArticleSummary>, ContentError> {
        let mut filter = Filter::new()
            .eq("published", true)
            .order_by("published_at", SortOrder::Descending);
        if let Some(category) = category.map(str::trim).filter(|value| !value.is_empty()) {
            filter = filter.eq("category", category);
        }

        let articles: Vec<Article> = backend::select_as(&*self.backend, ARTICLES_TABLE, &filter)?;
        Ok(articles.into_iter().map(ArticleSummary::from).collect())
    }

    /// Fetch a published article and count the view.
    pub fn get(&self, slug: &str) -> Result<Article, ContentError> {
        let filter = Filter::new().eq("slug", slug).eq("published", true);
        let mut article: Article = backend::select_one(&*self.backend, ARTICLES_TABLE, &filter)?
            .ok_or_else(|| ContentError::NotFound(slug.to_string()))?;

        article.view_count += 1;
        let mut patch = Row::new();
        patch.insert("view_count".to_string(), json!(article.view_count));
        match self.backend.update(ARTICLES_TABLE, &filter, patch) {
            Ok(_) => debug!(slug, views = article.view_count, "article view counted"),
            // A lost view count never blocks reading.
            Err(err) => warn!(slug, error = %err, "failed to count article view"),
        }

        Ok(article)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("article '{0}' not found")]
    NotFound(String),
    #[error(transparent)]
    Backend(#[from] BackendError),
}
