use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{EmailAddress, InvalidEmail, SubscribeRequest, Subscriber, DEFAULT_SOURCE};
use crate::backend::{self, BackendClient, BackendError, Filter, SUBSCRIBERS_TABLE};

/// Signup and removal of newsletter subscribers.
pub struct NewsletterService<B> {
    backend: Arc<B>,
}

impl<B> NewsletterService<B>
where
    B: BackendClient + 'static,
{
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    pub fn subscribe(&self, request: SubscribeRequest) -> Result<Subscriber, NewsletterError> {
        let email = EmailAddress::parse(&request.email)?;
        if self.find(&email)?.is_some() {
            return Err(NewsletterError::AlreadySubscribed(email.to_string()));
        }

        let source = request
            .source
            .as_deref()
            .map(str::trim)
            .filter(|source| !source.is_empty())
            .unwrap_or(DEFAULT_SOURCE)
            .to_string();
        let subscriber = Subscriber {
            email: email.to_string(),
            source,
            subscribed_at: Utc::now(),
        };

        match self
            .backend
            .insert(SUBSCRIBERS_TABLE, backend::to_row(&subscriber)?)
        {
            Ok(_) => {}
            Err(BackendError::Conflict) => {
                return Err(NewsletterError::AlreadySubscribed(email.to_string()))
            }
            Err(err) => {
                warn!(domain = email.domain(), error = %err, "failed to store subscriber");
                return Err(err.into());
            }
        }

        info!(
            domain = email.domain(),
            source = %subscriber.source,
            "newsletter subscription recorded"
        );
        Ok(subscriber)
    }

    pub fn unsubscribe(&self, raw_email: &str) -> Result<(), NewsletterError> {
        let email = EmailAddress::parse(raw_email)?;
        let removed = self
            .backend
            .delete(SUBSCRIBERS_TABLE, &Filter::new().eq("email", email.as_str()))?;
        if removed == 0 {
            return Err(NewsletterError::NotSubscribed(email.to_string()));
        }

        info!(domain = email.domain(), "newsletter subscription removed");
        Ok(())
    }

    pub fn find(&self, email: &EmailAddress) -> Result<Option<Subscriber>, NewsletterError> {
        let filter = Filter::new().eq("email", email.as_str());
        Ok(backend::select_one(
            &*self.backend,
            SUBSCRIBERS_TABLE,
            &filter,
        )?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NewsletterError {
    #[error(transparent)]
    InvalidEmail(#[from] InvalidEmail),
    #[error("{0} is already subscribed")]
    AlreadySubscribed(String),
    #[error("{0} is not subscribed")]
    NotSubscribed(String),
    #[error(transparent)]
    Backend(#[from] BackendError),
}
