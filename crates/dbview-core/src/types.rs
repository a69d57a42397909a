//! Domain types decoded from the table browser API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Table whose rows are HTTP request/response logs and get a dedicated layout
pub const DISTINGUISHED_TABLE: &str = "moonshot_requests";

/// Columns shown in the list view of the distinguished table, in display order
pub const LIST_KEY_FIELDS: [&str; 4] = [
    "id",
    "response_content_type",
    "response_status_code",
    "created_at",
];

/// Default number of rows requested per table fetch
pub const DEFAULT_ROW_LIMIT: u32 = 100;

/// One row of a table: column name to JSON value, in response order
pub type Row = Map<String, Value>;

/// Check whether a table uses the request/response layout
pub fn is_distinguished(table_name: &str) -> bool {
    table_name == DISTINGUISHED_TABLE
}

// ─────────────────────────────────────────────────────────────────
// Schema
// ─────────────────────────────────────────────────────────────────

/// A column as reported by the schema endpoints
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,

    /// Declared SQL type; may be empty for untyped SQLite columns
    #[serde(rename = "type", default)]
    pub column_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cid: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notnull: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pk: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            cid: None,
            notnull: None,
            default_value: None,
            pk: None,
            indexed: None,
        }
    }

    /// "name (type)" as shown in the field structure list
    pub fn signature(&self) -> String {
        format!("{} ({})", self.name, self.column_type)
    }
}

/// Restrict a schema to the distinguished table's list columns.
///
/// The result follows [`LIST_KEY_FIELDS`] order and skips fields the schema
/// does not contain.
pub fn restrict_to_key_fields(schema: &[ColumnDescriptor]) -> Vec<ColumnDescriptor> {
    LIST_KEY_FIELDS
        .iter()
        .filter_map(|field| schema.iter().find(|col| col.name == *field).cloned())
        .collect()
}

// ─────────────────────────────────────────────────────────────────
// Endpoint payloads
// ─────────────────────────────────────────────────────────────────

/// Result of one row fetch; replaced wholesale by the next fetch
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TableSnapshot {
    #[serde(default)]
    pub schema: Vec<ColumnDescriptor>,

    #[serde(default)]
    pub data: Vec<Row>,

    #[serde(default)]
    pub total_rows: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
}

impl TableSnapshot {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// `/api/tables`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TableList {
    pub tables: Vec<String>,
}

/// `/api/table/{name}/info`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TableInfo {
    pub table_name: String,

    #[serde(default)]
    pub row_count: u64,

    #[serde(default)]
    pub column_count: u64,

    #[serde(default)]
    pub schema: Vec<ColumnDescriptor>,
}

/// `/api/database/info`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DatabaseInfo {
    pub path: String,

    pub file_size_human: String,

    #[serde(default)]
    pub file_size: u64,

    #[serde(default)]
    pub table_count: u64,

    #[serde(default)]
    pub total_records: u64,

    #[serde(default)]
    pub tables: Vec<String>,
}

impl DatabaseInfo {
    /// Header line: "{path} ({file_size_human})"
    pub fn summary(&self) -> String {
        format!("{} ({})", self.path, self.file_size_human)
    }
}

// ─────────────────────────────────────────────────────────────────
// Number formatting
// ─────────────────────────────────────────────────────────────────

/// Format an integer with comma thousands separators
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_missing_data_is_empty() {
        let snapshot: TableSnapshot =
            serde_json::from_value(json!({"schema": [], "total_rows": 0})).unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.total_rows, 0);
    }

    #[test]
    fn test_snapshot_preserves_row_key_order() {
        let snapshot: TableSnapshot = serde_json::from_str(
            r#"{"data": [{"zeta": 1, "alpha": 2, "mid": 3}], "total_rows": 1}"#,
        )
        .unwrap();
        let keys: Vec<&str> = snapshot.data[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_column_descriptor_extra_fields() {
        let col: ColumnDescriptor = serde_json::from_value(json!({
            "cid": 0, "name": "id", "type": "INTEGER", "notnull": 1,
            "default_value": null, "pk": 1, "indexed": false
        }))
        .unwrap();
        assert_eq!(col.signature(), "id (INTEGER)");
        assert_eq!(col.pk, Some(1));
        assert_eq!(col.indexed, Some(false));
    }

    #[test]
    fn test_column_descriptor_missing_type() {
        let col: ColumnDescriptor = serde_json::from_value(json!({"name": "x"})).unwrap();
        assert_eq!(col.column_type, "");
        assert_eq!(col.pk, None);
    }

    #[test]
    fn test_restrict_to_key_fields_follows_key_order() {
        let schema = vec![
            ColumnDescriptor::new("created_at", "TEXT"),
            ColumnDescriptor::new("request_body", "TEXT"),
            ColumnDescriptor::new("id", "INTEGER"),
            ColumnDescriptor::new("response_status_code", "INTEGER"),
        ];
        let names: Vec<String> = restrict_to_key_fields(&schema)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["id", "response_status_code", "created_at"]);
    }

    #[test]
    fn test_database_info_summary() {
        let info: DatabaseInfo = serde_json::from_value(json!({
            "path": "/data/app.db", "file_size": 2048, "file_size_human": "2.00 KB",
            "table_count": 2, "total_records": 10, "tables": ["a", "b"]
        }))
        .unwrap();
        assert_eq!(info.summary(), "/data/app.db (2.00 KB)");
    }

    #[test]
    fn test_table_list_requires_tables() {
        assert!(serde_json::from_value::<TableList>(json!({})).is_err());
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
