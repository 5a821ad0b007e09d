use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{primary_key, BackendClient, BackendError, Filter, Row};

/// Process-local stand-in for the hosted backend, keyed by table name.
///
/// Inserts honour the same unique columns as the hosted schema (see [`primary_key`]).
#[derive(Debug, Default)]
pub struct MemoryBackend {
    tables: Mutex<HashMap<String, Vec<Row>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(table: &str, rows: Vec<Row>) -> Self {
        Self {
            tables: Mutex::new(HashMap::from([(table.to_string(), rows)])),
        }
    }

    /// Snapshot of one table, empty when nothing was written to it.
    pub fn rows(&self, table: &str) -> Vec<Row> {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<Row>>>, BackendError> {
        self.tables
            .lock()
            .map_err(|_| BackendError::Unavailable("in-memory backend lock poisoned".to_string()))
    }
}

impl BackendClient for MemoryBackend {
    fn select(&self, table: &str, filter: &Filter) -> Result<Vec<Row>, BackendError> {
        let guard = self.tables()?;
        Ok(filter.apply(guard.get(table).cloned().unwrap_or_default()))
    }

    fn insert(&self, table: &str, row: Row) -> Result<Row, BackendError> {
        let mut guard = self.tables()?;
        let rows = guard.entry(table.to_string()).or_default();
        if let Some(key) = primary_key(table) {
            let value = row.get(key);
            if value.is_some() && rows.iter().any(|existing| existing.get(key) == value) {
                return Err(BackendError::Conflict);
            }
        }
        rows.push(row.clone());
        Ok(row)
    }

    fn update(&self, table: &str, filter: &Filter, patch: Row) -> Result<usize, BackendError> {
        let mut guard = self.tables()?;
        let mut changed = 0;
        if let Some(rows) = guard.get_mut(table) {
            for row in rows.iter_mut().filter(|row| filter.matches(row)) {
                row.extend(patch.clone());
                changed += 1;
            }
        }
        Ok(changed)
    }

    fn delete(&self, table: &str, filter: &Filter) -> Result<usize, BackendError> {
        let mut guard = self.tables()?;
        let Some(rows) = guard.get_mut(table) else {
            return Ok(0);
        };
        let before = rows.len();
        rows.retain(|row| !filter.matches(row));
        Ok(before - rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{SUBSCRIBERS_TABLE, SUBMISSIONS_TABLE};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn inserts_reject_duplicate_unique_columns() {
        let backend = MemoryBackend::new();
        backend
            .insert(SUBSCRIBERS_TABLE, row(json!({"email": "a@example.com"})))
            .expect("first insert");

        assert!(matches!(
            backend.insert(SUBSCRIBERS_TABLE, row(json!({"email": "a@example.com"}))),
            Err(BackendError::Conflict)
        ));
        assert_eq!(backend.rows(SUBSCRIBERS_TABLE).len(), 1);
    }

    #[test]
    fn tables_without_a_unique_column_accept_repeats() {
        let backend = MemoryBackend::new();
        backend.insert("events", row(json!({"kind": "view"}))).expect("insert");
        backend.insert("events", row(json!({"kind": "view"}))).expect("insert");

        assert_eq!(backend.rows("events").len(), 2);
    }

    #[test]
    fn update_merges_patch_into_matching_rows() {
        let backend = MemoryBackend::with_rows(
            SUBMISSIONS_TABLE,
            vec![
                row(json!({"id": "sub-a", "tool": "customer-plan"})),
                row(json!({"id": "sub-b", "tool": "launch-diagnostic"})),
            ],
        );

        let changed = backend
            .update(
                SUBMISSIONS_TABLE,
                &Filter::new().eq("tool", "customer-plan"),
                row(json!({"band": "Start Small"})),
            )
            .expect("updates");

        assert_eq!(changed, 1);
        let rows = backend.rows(SUBMISSIONS_TABLE);
        assert_eq!(rows[0].get("band"), Some(&json!("Start Small")));
        assert_eq!(rows[1].get("band"), None);
    }

    #[test]
    fn update_and_delete_on_missing_tables_touch_nothing() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.update("nowhere", &Filter::new(), Row::new()).expect("ok"), 0);
        assert_eq!(backend.delete("nowhere", &Filter::new()).expect("ok"), 0);
        assert!(backend.rows("nowhere").is_empty());
    }

    #[test]
    fn poisoned_lock_reports_unavailable() {
        let backend = Arc::new(MemoryBackend::new());
        let poisoner = backend.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.tables.lock().expect("lock");
            panic!("poison the table lock");
        })
        .join();

        assert!(matches!(
            backend.select(SUBSCRIBERS_TABLE, &Filter::new()),
            Err(BackendError::Unavailable(_))
        ));
        assert!(backend.rows(SUBSCRIBERS_TABLE).is_empty());
    }
}
