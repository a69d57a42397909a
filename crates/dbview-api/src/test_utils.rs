//! Test utilities for API consumers
//!
//! Provides an in-memory [`TableApi`] and helpers for building payloads.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use dbview_core::{ColumnDescriptor, DatabaseInfo, Row, TableInfo, TableList, TableSnapshot};

use crate::client::TableApi;
use crate::error::{ApiError, FetchError};

#[derive(Debug)]
struct FakeState {
    database_info: Result<DatabaseInfo, FetchError>,
    tables: Result<TableList, FetchError>,
    table_info: HashMap<String, Result<TableInfo, FetchError>>,
    rows: HashMap<String, Result<TableSnapshot, FetchError>>,
    calls: Vec<String>,
}

/// In-memory API answering from canned payloads.
///
/// Unknown tables answer with a 404-style application error. Every call is
/// recorded and can be inspected with [`FakeTableApi::calls`].
#[derive(Debug, Clone)]
pub struct FakeTableApi {
    state: Arc<Mutex<FakeState>>,
}

impl Default for FakeTableApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeTableApi {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                database_info: Ok(test_database_info("/tmp/test.db")),
                tables: Ok(TableList::default()),
                table_info: HashMap::new(),
                rows: HashMap::new(),
                calls: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Register a table with its rows; table info is derived from the snapshot
    pub fn with_table(self, name: &str, snapshot: TableSnapshot) -> Self {
        {
            let mut state = self.lock();
            if let Ok(list) = state.tables.as_mut() {
                if !list.tables.iter().any(|t| t == name) {
                    list.tables.push(name.to_string());
                }
            }
            state.table_info.insert(
                name.to_string(),
                Ok(TableInfo {
                    table_name: name.to_string(),
                    row_count: snapshot.total_rows,
                    column_count: snapshot.schema.len() as u64,
                    schema: snapshot.schema.clone(),
                }),
            );
            state.rows.insert(name.to_string(), Ok(snapshot));
        }
        self
    }

    pub fn with_database_info(self, result: Result<DatabaseInfo, FetchError>) -> Self {
        self.lock().database_info = result;
        self
    }

    pub fn with_tables_result(self, result: Result<TableList, FetchError>) -> Self {
        self.lock().tables = result;
        self
    }

    pub fn with_table_info_result(self, name: &str, result: Result<TableInfo, FetchError>) -> Self {
        self.lock().table_info.insert(name.to_string(), result);
        self
    }

    pub fn with_rows_result(self, name: &str, result: Result<TableSnapshot, FetchError>) -> Self {
        self.lock().rows.insert(name.to_string(), result);
        self
    }

    /// Calls made so far, e.g. `"table_rows:users:100"`
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    fn record(&self, call: String) {
        self.lock().calls.push(call);
    }
}

fn missing_table(name: &str) -> FetchError {
    FetchError::Application(ApiError::from_value(serde_json::json!({
        "error": "表不存在",
        "table_name": name,
    })))
}

impl TableApi for FakeTableApi {
    async fn database_info(&self) -> Result<DatabaseInfo, FetchError> {
        self.record("database_info".to_string());
        self.lock().database_info.clone()
    }

    async fn list_tables(&self) -> Result<TableList, FetchError> {
        self.record("list_tables".to_string());
        self.lock().tables.clone()
    }

    async fn table_info(&self, name: &str) -> Result<TableInfo, FetchError> {
        self.record(format!("table_info:{}", name));
        self.lock()
            .table_info
            .get(name)
            .cloned()
            .unwrap_or_else(|| Err(missing_table(name)))
    }

    async fn table_rows(&self, name: &str, limit: u32) -> Result<TableSnapshot, FetchError> {
        self.record(format!("table_rows:{}:{}", name, limit));
        let result = self
            .lock()
            .rows
            .get(name)
            .cloned()
            .unwrap_or_else(|| Err(missing_table(name)));
        result.map(|mut snap| {
            snap.data.truncate(limit as usize);
            snap
        })
    }
}

/// Database info with a fixed size
pub fn test_database_info(path: &str) -> DatabaseInfo {
    DatabaseInfo {
        path: path.to_string(),
        file_size_human: "2.00 KB".to_string(),
        file_size: 2048,
        table_count: 0,
        total_records: 0,
        tables: Vec::new(),
    }
}

/// Snapshot from `(name, type)` columns and JSON object rows
pub fn test_snapshot(columns: &[(&str, &str)], rows: Vec<Value>) -> TableSnapshot {
    let data: Vec<Row> = rows
        .into_iter()
        .filter_map(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect();
    TableSnapshot {
        schema: columns
            .iter()
            .map(|(name, ty)| ColumnDescriptor::new(*name, *ty))
            .collect(),
        total_rows: data.len() as u64,
        data,
        table_name: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fake_serves_registered_table() {
        let api = FakeTableApi::new().with_table(
            "users",
            test_snapshot(&[("id", "INTEGER")], vec![json!({"id": 1}), json!({"id": 2})]),
        );

        let tables = api.list_tables().await.unwrap();
        assert_eq!(tables.tables, vec!["users"]);

        let info = api.table_info("users").await.unwrap();
        assert_eq!(info.row_count, 2);

        let rows = api.table_rows("users", 1).await.unwrap();
        assert_eq!(rows.data.len(), 1);

        assert_eq!(
            api.calls(),
            vec!["list_tables", "table_info:users", "table_rows:users:1"]
        );
    }

    #[tokio::test]
    async fn test_fake_unknown_table_is_application_error() {
        let api = FakeTableApi::new();
        let err = api.table_rows("ghost", 100).await.unwrap_err();
        assert_eq!(err.api_error().unwrap().table_name.as_deref(), Some("ghost"));
    }
}
