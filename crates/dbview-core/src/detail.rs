//! Detail-view model for a single row

use serde_json::Value;

use crate::cell::display_number;
use crate::labels;
use crate::types::{is_distinguished, Row};

const REQUEST_PREFIX: &str = "request_";
const RESPONSE_PREFIX: &str = "response_";

/// How one field's value is shown in the detail modal
#[derive(Debug, Clone, PartialEq)]
pub enum DetailValue {
    Null,
    EmptyString,
    /// Pretty-printed JSON, possibly spanning several lines
    Json(String),
    /// String made only of whitespace
    Whitespace,
    Text(String),
    /// Number or boolean
    Plain(String),
}

impl DetailValue {
    pub fn text(&self) -> &str {
        match self {
            DetailValue::Null => labels::NULL_MARKER,
            DetailValue::EmptyString => labels::EMPTY_STRING_MARKER,
            DetailValue::Whitespace => labels::WHITESPACE_MARKER,
            DetailValue::Json(s) | DetailValue::Text(s) | DetailValue::Plain(s) => s,
        }
    }

    pub fn is_marker(&self) -> bool {
        matches!(
            self,
            DetailValue::Null | DetailValue::EmptyString | DetailValue::Whitespace
        )
    }
}

/// Format a value for the detail modal.
///
/// Strings that parse as JSON are pretty-printed before the whitespace check,
/// so `" 1 "` shows as `1`.
pub fn format_detail_value(value: &Value) -> DetailValue {
    match value {
        Value::Null => DetailValue::Null,
        Value::String(s) if s.is_empty() => DetailValue::EmptyString,
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(parsed) => DetailValue::Json(pretty(&parsed)),
            Err(_) if s.trim().is_empty() => DetailValue::Whitespace,
            Err(_) => DetailValue::Text(s.clone()),
        },
        Value::Object(_) | Value::Array(_) => DetailValue::Json(pretty(value)),
        Value::Bool(b) => DetailValue::Plain(b.to_string()),
        Value::Number(n) => DetailValue::Plain(display_number(n)),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// One labelled field
#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub name: String,
    pub value: DetailValue,
}

/// Group of fields, optionally titled
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSection {
    pub title: Option<&'static str>,
    pub fields: Vec<DetailField>,
}

/// Full detail of one row
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub table_name: String,
    pub sections: Vec<DetailSection>,
}

impl DetailView {
    /// Build the detail view for a row.
    ///
    /// Rows of the distinguished table are split into basic, request and
    /// response sections by key prefix; empty sections are dropped. Every
    /// other table gets a single untitled section in key order.
    pub fn build(table_name: &str, row: &Row) -> Self {
        let sections = if is_distinguished(table_name) {
            let mut basic = Vec::new();
            let mut request = Vec::new();
            let mut response = Vec::new();

            for (name, value) in row {
                let entry = field(name, value);
                if name.starts_with(REQUEST_PREFIX) {
                    request.push(entry);
                } else if name.starts_with(RESPONSE_PREFIX) {
                    response.push(entry);
                } else {
                    basic.push(entry);
                }
            }

            [
                (labels::SECTION_BASIC, basic),
                (labels::SECTION_REQUEST, request),
                (labels::SECTION_RESPONSE, response),
            ]
            .into_iter()
            .filter(|(_, fields)| !fields.is_empty())
            .map(|(title, fields)| DetailSection {
                title: Some(title),
                fields,
            })
            .collect()
        } else {
            vec![DetailSection {
                title: None,
                fields: row.iter().map(|(name, value)| field(name, value)).collect(),
            }]
        };

        Self {
            table_name: table_name.to_string(),
            sections,
        }
    }

    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }
}

fn field(name: &str, value: &Value) -> DetailField {
    DetailField {
        name: name.to_string(),
        value: format_detail_value(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DISTINGUISHED_TABLE;
    use serde_json::json;
    use std::collections::HashSet;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => panic!("row must be an object"),
        }
    }

    #[test]
    fn test_format_detail_value() {
        assert_eq!(format_detail_value(&json!(null)), DetailValue::Null);
        assert_eq!(format_detail_value(&json!("")), DetailValue::EmptyString);
        assert_eq!(format_detail_value(&json!("   ")), DetailValue::Whitespace);
        assert_eq!(
            format_detail_value(&json!("hello")),
            DetailValue::Text("hello".into())
        );
        assert_eq!(
            format_detail_value(&json!("{\"a\":1}")),
            DetailValue::Json("{\n  \"a\": 1\n}".into())
        );
        assert_eq!(
            format_detail_value(&json!({"b": [1]})),
            DetailValue::Json("{\n  \"b\": [\n    1\n  ]\n}".into())
        );
        assert_eq!(format_detail_value(&json!(3)), DetailValue::Plain("3".into()));
        assert_eq!(
            format_detail_value(&json!(true)),
            DetailValue::Plain("true".into())
        );
    }

    #[test]
    fn test_json_like_scalar_strings_are_pretty_printed() {
        assert_eq!(format_detail_value(&json!("42")), DetailValue::Json("42".into()));
        assert_eq!(format_detail_value(&json!(" 1 ")), DetailValue::Json("1".into()));
    }

    #[test]
    fn test_marker_text() {
        assert_eq!(DetailValue::EmptyString.text(), "(空字符串)");
        assert_eq!(DetailValue::Whitespace.text(), "(空白字符)");
        assert!(DetailValue::Null.is_marker());
    }

    #[test]
    fn test_plain_table_single_section_in_key_order() {
        let r = row(json!({"b": 1, "a": "x", "c": null}));
        let view = DetailView::build("users", &r);
        assert_eq!(view.sections.len(), 1);
        assert_eq!(view.sections[0].title, None);
        let names: Vec<&str> = view.sections[0]
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_distinguished_table_partitions_fields() {
        let r = row(json!({
            "id": 1,
            "request_method": "POST",
            "response_status_code": 200,
            "created_at": "2024-01-01",
            "request_body": "{}",
            "response_body": "ok"
        }));
        let view = DetailView::build(DISTINGUISHED_TABLE, &r);

        let titles: Vec<_> = view.sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                Some(labels::SECTION_BASIC),
                Some(labels::SECTION_REQUEST),
                Some(labels::SECTION_RESPONSE)
            ]
        );

        let all: Vec<&str> = view
            .sections
            .iter()
            .flat_map(|s| s.fields.iter().map(|f| f.name.as_str()))
            .collect();
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(all.len(), r.len());
        assert_eq!(unique.len(), r.len());

        assert!(view.sections[1]
            .fields
            .iter()
            .all(|f| f.name.starts_with("request_")));
        assert!(view.sections[2]
            .fields
            .iter()
            .all(|f| f.name.starts_with("response_")));
    }

    #[test]
    fn test_distinguished_table_omits_empty_sections() {
        let r = row(json!({"response_body": "ok", "response_status_code": 404}));
        let view = DetailView::build(DISTINGUISHED_TABLE, &r);
        assert_eq!(view.sections.len(), 1);
        assert_eq!(view.sections[0].title, Some(labels::SECTION_RESPONSE));
        assert_eq!(view.field_count(), 2);
    }
}
