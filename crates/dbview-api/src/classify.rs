//! Response classification
//!
//! Turns a raw HTTP outcome into either the decoded payload or a
//! [`FetchError`] of the right tier. No I/O happens here.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{is_truthy, ApiError, FetchError};

/// Whether an endpoint must answer with a JSON content type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTypePolicy {
    RequireJson,
    Any,
}

/// Check for a 2xx status
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Classify one response.
///
/// Order matters:
/// 1. non-2xx: a JSON body becomes [`FetchError::Application`], anything else
///    [`FetchError::Status`]
/// 2. content type check when the policy requires JSON
/// 3. unparseable body: [`FetchError::InvalidJson`]
/// 4. truthy `error` field: [`FetchError::Application`]
/// 5. shape mismatch: [`FetchError::InvalidJson`]
pub fn classify_response<T: DeserializeOwned>(
    status: u16,
    content_type: Option<&str>,
    body: &str,
    policy: ContentTypePolicy,
) -> Result<T, FetchError> {
    if !is_success(status) {
        return match serde_json::from_str::<Value>(body) {
            Ok(value) => Err(FetchError::Application(ApiError::from_value(value))),
            Err(_) => Err(FetchError::Status {
                status,
                body: body.to_string(),
            }),
        };
    }

    if policy == ContentTypePolicy::RequireJson && !is_json_content_type(content_type) {
        return Err(FetchError::UnexpectedContentType {
            content_type: content_type.map(str::to_string),
        });
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::invalid_json(e.to_string()))?;

    if value.get("error").is_some_and(is_truthy) {
        return Err(FetchError::Application(ApiError::from_value(value)));
    }

    serde_json::from_value(value).map_err(|e| FetchError::invalid_json(e.to_string()))
}

fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
}
