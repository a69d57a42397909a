//! Fetch failure tiers

use serde_json::Value;
use thiserror::Error;

use dbview_core::labels;

/// Structured error payload returned by the API (`{"error": ..., ...}`)
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// Error text; "未知错误" when the payload carries none
    pub error: String,
    pub error_type: Option<String>,
    pub table_name: Option<String>,
    pub path: Option<String>,
    /// Payload as received, for the raw-JSON view
    pub raw: Value,
}

impl ApiError {
    pub fn from_value(raw: Value) -> Self {
        let error = raw
            .get("error")
            .filter(|v| is_truthy(v))
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(|| labels::UNKNOWN_ERROR.to_string());

        Self {
            error,
            error_type: string_field(&raw, "error_type"),
            table_name: string_field(&raw, "table_name"),
            path: string_field(&raw, "path"),
            raw,
        }
    }

    /// "{error}: {path}" when a path is reported, otherwise the error text
    pub fn with_path(&self) -> String {
        match &self.path {
            Some(path) => format!("{}: {}", self.error, path),
            None => self.error.clone(),
        }
    }

    pub fn raw_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

fn string_field(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// JavaScript-style truthiness of a JSON value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Which failure tier an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureTier {
    /// Transport failure or non-2xx status without a JSON body
    Transport,
    /// Body is not the JSON the endpoint promised
    Malformed,
    /// The API answered with an error payload
    Application,
}

/// Why a fetch did not produce its payload
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected content type: {}", content_type.as_deref().unwrap_or("<none>"))]
    UnexpectedContentType { content_type: Option<String> },

    #[error("invalid JSON: {message}")]
    InvalidJson { message: String },

    #[error("API error: {}", .0.error)]
    Application(ApiError),
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::InvalidJson {
            message: message.into(),
        }
    }

    pub fn tier(&self) -> FailureTier {
        match self {
            FetchError::Transport { .. } | FetchError::Status { .. } => FailureTier::Transport,
            FetchError::UnexpectedContentType { .. } | FetchError::InvalidJson { .. } => {
                FailureTier::Malformed
            }
            FetchError::Application(_) => FailureTier::Application,
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            FetchError::Application(api) => Some(api),
            _ => None,
        }
    }

    /// Text shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Transport { message } => labels::load_failed(message),
            FetchError::Status { status, body } => labels::server_error(*status, body),
            FetchError::UnexpectedContentType { .. } => labels::INVALID_DATA_FORMAT.to_string(),
            FetchError::InvalidJson { message } => labels::load_failed(message),
            FetchError::Application(api) => api.error.clone(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_fields() {
        let api = ApiError::from_value(json!({
            "error": "数据加载失败: no such table",
            "error_type": "OperationalError",
            "table_name": "foo"
        }));
        assert_eq!(api.error, "数据加载失败: no such table");
        assert_eq!(api.error_type.as_deref(), Some("OperationalError"));
        assert_eq!(api.table_name.as_deref(), Some("foo"));
        assert_eq!(api.path, None);
    }

    #[test]
    fn test_api_error_defaults_to_unknown() {
        assert_eq!(ApiError::from_value(json!({})).error, "未知错误");
        assert_eq!(ApiError::from_value(json!({"error": ""})).error, "未知错误");
        assert_eq!(ApiError::from_value(json!([1, 2])).error, "未知错误");
    }

    #[test]
    fn test_api_error_with_path() {
        let api = ApiError::from_value(json!({"error": "数据库文件不存在", "path": "/x.db"}));
        assert_eq!(api.with_path(), "数据库文件不存在: /x.db");
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn test_user_messages() {
        let err = FetchError::Status {
            status: 500,
            body: "Internal Server Error".into(),
        };
        assert_eq!(err.user_message(), "服务器错误 500: Internal Server Error");
        assert_eq!(err.tier(), FailureTier::Transport);

        let err = FetchError::UnexpectedContentType {
            content_type: Some("text/html".into()),
        };
        assert_eq!(err.user_message(), "服务器返回了无效的数据格式");
        assert_eq!(err.tier(), FailureTier::Malformed);

        let err = FetchError::transport("connection refused");
        assert_eq!(err.user_message(), "加载失败: connection refused");
    }
}
