//! Date/time parsing and display for timestamp-like cells

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default display pattern for timestamp cells
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Naive layouts accepted for timestamp strings without an offset
const NAIVE_DATETIME_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Display options for formatted cells
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormatOptions {
    /// strftime pattern for timestamp cells
    pub datetime_format: String,

    /// Render timestamps in UTC instead of the local zone
    pub utc: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            utc: false,
        }
    }
}

impl FormatOptions {
    /// Build options, falling back to the default pattern when `pattern` is
    /// not a valid strftime string
    pub fn new(pattern: impl Into<String>, utc: bool) -> Self {
        let pattern = pattern.into();
        if is_valid_pattern(&pattern) {
            Self {
                datetime_format: pattern,
                utc,
            }
        } else {
            tracing::warn!(
                "Invalid datetime_format {:?}, using {:?}",
                pattern,
                DEFAULT_DATETIME_FORMAT
            );
            Self {
                datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
                utc,
            }
        }
    }

    /// Render an instant with these options
    pub fn format(&self, instant: &DateTime<Utc>) -> String {
        let pattern = if is_valid_pattern(&self.datetime_format) {
            self.datetime_format.as_str()
        } else {
            DEFAULT_DATETIME_FORMAT
        };

        if self.utc {
            instant.format(pattern).to_string()
        } else {
            instant.with_timezone(&Local).format(pattern).to_string()
        }
    }
}

/// Check that a strftime pattern contains no unknown specifiers
pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Interpret a JSON value as an instant.
///
/// Numbers are epoch milliseconds. Strings accept RFC 3339, naive
/// `YYYY-MM-DD HH:MM:SS[.f]` (space or `T` separated, read in the local zone)
/// and bare `YYYY-MM-DD` dates (read as UTC midnight).
pub fn parse_datetime(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => {
            let millis = match n.as_i64() {
                Some(ms) => ms,
                None => {
                    let f = n.as_f64()?;
                    if !f.is_finite() {
                        return None;
                    }
                    f.trunc() as i64
                }
            };
            DateTime::from_timestamp_millis(millis)
        }
        Value::String(s) => parse_datetime_str(s.trim()),
        _ => None,
    }
}

fn parse_datetime_str(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for layout in NAIVE_DATETIME_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
