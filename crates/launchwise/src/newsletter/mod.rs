//! Newsletter signup: address validation, duplicate handling, and removal.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::{EmailAddress, InvalidEmail, SubscribeRequest, Subscriber, DEFAULT_SOURCE};
pub use router::newsletter_router;
pub use service::{NewsletterError, NewsletterService};
