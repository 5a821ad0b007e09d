//! Thin client seam over the hosted backend (tables addressed by name, JSON rows).
//!
//! Services receive a `BackendClient` explicitly; nothing in the crate reaches for a
//! global handle.

mod filter;
mod memory;

pub use filter::{Filter, SortOrder};
pub use memory::MemoryBackend;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

pub type Row = Map<String, Value>;

pub const ARTICLES_TABLE: &str = "articles";
pub const SUBSCRIBERS_TABLE: &str = "newsletter_subscribers";
pub const SUBMISSIONS_TABLE: &str = "tool_submissions";

/// Column the hosted schema treats as unique for each known table.
pub fn primary_key(table: &str) -> Option<&'static str> {
    match table {
        ARTICLES_TABLE => Some("slug"),
        SUBSCRIBERS_TABLE => Some("email"),
        SUBMISSIONS_TABLE => Some("id"),
        _ => None,
    }
}

/// Generic table access offered by the hosted backend.
pub trait BackendClient: Send + Sync {
    fn select(&self, table: &str, filter: &Filter) -> Result<Vec<Row>, BackendError>;
    fn insert(&self, table: &str, row: Row) -> Result<Row, BackendError>;
    /// Merge `patch` into every matching row, returning how many changed.
    fn update(&self, table: &str, filter: &Filter, patch: Row) -> Result<usize, BackendError>;
    fn delete(&self, table: &str, filter: &Filter) -> Result<usize, BackendError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("row already exists")]
    Conflict,
    #[error("row not found")]
    NotFound,
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("row could not be decoded: {0}")]
    Decode(String),
}

/// Serialize a typed record into a row.
pub fn to_row<T: Serialize>(value: &T) -> Result<Row, BackendError> {
    match serde_json::to_value(value).map_err(|err| BackendError::Decode(err.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(BackendError::Decode(format!(
            "expected an object, found {other}"
        ))),
    }
}

pub fn from_row<T: DeserializeOwned>(row: Row) -> Result<T, BackendError> {
    serde_json::from_value(Value::Object(row)).map_err(|err| BackendError::Decode(err.to_string()))
}

/// Select and decode every matching row.
pub fn select_as<T: DeserializeOwned>(
    client: &dyn BackendClient,
    table: &str,
    filter: &Filter,
) -> Result<Vec<T>, BackendError> {
    client
        .select(table, filter)?
        .into_iter()
        .map(from_row)
        .collect()
}

pub fn select_one<T: DeserializeOwned>(
    client: &dyn BackendClient,
    table: &str,
    filter: &Filter,
) -> Result<Option<T>, BackendError> {
    let filter = filter.clone().limit(1);
    Ok(select_as(client, table, &filter)?.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Pillar {
        slug: String,
        weight: u8,
    }

    #[test]
    fn typed_records_convert_to_rows_and_back() {
        let pillar = Pillar {
            slug: "validation".to_string(),
            weight: 3,
        };
        let row = to_row(&pillar).expect("object row");
        assert_eq!(row.get("slug"), Some(&json!("validation")));
        assert_eq!(from_row::<Pillar>(row).expect("decodes"), pillar);
    }

    #[test]
    fn non_object_values_are_rejected() {
        assert!(matches!(to_row(&42), Err(BackendError::Decode(_))));
        let mut row = Row::new();
        row.insert("slug".to_string(), json!(7));
        assert!(matches!(from_row::<Pillar>(row), Err(BackendError::Decode(_))));
    }
}
