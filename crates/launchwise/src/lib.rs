pub mod assessments;
pub mod backend;
pub mod config;
pub mod content;
pub mod error;
pub mod newsletter;
pub mod telemetry;

#[cfg(test)]
mod test_support;
