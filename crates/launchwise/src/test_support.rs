//! Backend doubles and response helpers shared by unit tests across modules.

use axum::response::Response;
use serde_json::Value;

pub(crate) use crate::backend::MemoryBackend;
use crate::backend::{BackendClient, BackendError, Filter, Row};

pub(crate) struct UnavailableBackend;

impl BackendClient for UnavailableBackend {
    fn select(&self, _table: &str, _filter: &Filter) -> Result<Vec<Row>, BackendError> {
        Err(BackendError::Unavailable("backend offline".to_string()))
    }

    fn insert(&self, _table: &str, _row: Row) -> Result<Row, BackendError> {
        Err(BackendError::Unavailable("backend offline".to_string()))
    }

    fn update(&self, _table: &str, _filter: &Filter, _patch: Row) -> Result<usize, BackendError> {
        Err(BackendError::Unavailable("backend offline".to_string()))
    }

    fn delete(&self, _table: &str, _filter: &Filter) -> Result<usize, BackendError> {
        Err(BackendError::Unavailable("backend offline".to_string()))
    }
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
