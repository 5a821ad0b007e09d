use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source recorded when a signup form does not name one.
pub const DEFAULT_SOURCE: &str = "website";

/// A normalised, validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Trim and lowercase `raw`, then check its shape.
    pub fn parse(raw: &str) -> Result<Self, InvalidEmail> {
        let email = raw.trim().to_lowercase();
        if email.is_empty() {
            return Err(InvalidEmail::Empty);
        }
        if email.chars().any(char::is_whitespace) {
            return Err(InvalidEmail::Whitespace);
        }

        let mut parts = email.split('@');
        let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => (local, domain),
            (_, None, _) => return Err(InvalidEmail::MissingAt),
            _ => return Err(InvalidEmail::MultipleAt),
        };

        if local.is_empty() {
            return Err(InvalidEmail::EmptyLocalPart);
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(InvalidEmail::Domain);
        }

        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn domain(&self) -> &str {
        self.0.rsplit('@').next().unwrap_or_default()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEmail {
    #[error("email address is required")]
    Empty,
    #[error("email address must not contain whitespace")]
    Whitespace,
    #[error("email address must contain an @")]
    MissingAt,
    #[error("email address must contain a single @")]
    MultipleAt,
    #[error("email address is missing the part before the @")]
    EmptyLocalPart,
    #[error("email domain must contain a dot and not start or end with one")]
    Domain,
}

/// Body accepted by the signup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
    #[serde(default)]
    pub source: Option<String>,
}

/// Stored row in `newsletter_subscribers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    pub email: String,
    pub source: String,
    pub subscribed_at: DateTime<Utc>,
}
