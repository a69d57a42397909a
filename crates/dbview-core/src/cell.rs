//! Cell formatting rules
//!
//! Every list cell goes through an ordered rule table. The first rule that
//! matches decides the [`CellMarkup`]; the last rule always matches, so
//! formatting is total.

use serde_json::{Number, Value};

use crate::datetime::{parse_datetime, FormatOptions};
use crate::labels;

/// Strings longer than this many characters are truncated in the list view
pub const TRUNCATE_AT: usize = 100;

/// Semantic colour of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Primary,
    Warning,
    Danger,
    Info,
    Secondary,
    Dark,
}

/// HTTP status code bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Redirect,
    ClientError,
    ServerError,
    Other,
}

impl StatusClass {
    /// Bucket a numeric status: anything below 200 is `Other`
    pub fn from_code(code: f64) -> Self {
        if (200.0..300.0).contains(&code) {
            StatusClass::Success
        } else if (300.0..400.0).contains(&code) {
            StatusClass::Redirect
        } else if (400.0..500.0).contains(&code) {
            StatusClass::ClientError
        } else if code >= 500.0 {
            StatusClass::ServerError
        } else {
            StatusClass::Other
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusClass::Success => "2xx",
            StatusClass::Redirect => "3xx",
            StatusClass::ClientError => "4xx",
            StatusClass::ServerError => "5xx",
            StatusClass::Other => "other",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            StatusClass::Success => Tone::Success,
            StatusClass::Redirect => Tone::Info,
            StatusClass::ClientError => Tone::Warning,
            StatusClass::ServerError => Tone::Danger,
            StatusClass::Other => Tone::Secondary,
        }
    }
}

/// Badge tone for an HTTP verb; unknown verbs are `Secondary`
pub fn method_tone(verb: &str) -> Tone {
    match verb {
        "GET" => Tone::Success,
        "POST" => Tone::Primary,
        "PUT" => Tone::Warning,
        "DELETE" => Tone::Danger,
        "PATCH" => Tone::Info,
        "HEAD" => Tone::Secondary,
        "OPTIONS" => Tone::Dark,
        _ => Tone::Secondary,
    }
}

/// Typed result of formatting one cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellMarkup {
    /// Missing value marker
    Null,
    /// Empty string marker
    Empty,
    Bool(bool),
    Status { code: String, class: StatusClass },
    Method { verb: String, tone: Tone },
    DateTime(String),
    /// URL or path, shown monospace
    Code(String),
    /// Structured value collapsed to a badge
    JsonBadge,
    /// Long string; `shown` ends with an ellipsis, `full` is kept for tooltips
    Truncated { shown: String, full: String },
    Text(String),
}

impl CellMarkup {
    /// Plain text the cell displays
    pub fn text(&self) -> String {
        match self {
            CellMarkup::Null => labels::NULL_MARKER.to_string(),
            CellMarkup::Empty => labels::EMPTY_MARKER.to_string(),
            CellMarkup::Bool(true) => labels::BOOL_TRUE.to_string(),
            CellMarkup::Bool(false) => labels::BOOL_FALSE.to_string(),
            CellMarkup::Status { code, .. } => code.clone(),
            CellMarkup::Method { verb, .. } => verb.clone(),
            CellMarkup::DateTime(s) | CellMarkup::Code(s) | CellMarkup::Text(s) => s.clone(),
            CellMarkup::JsonBadge => labels::JSON_BADGE.to_string(),
            CellMarkup::Truncated { shown, .. } => shown.clone(),
        }
    }

    /// Untruncated text of the cell
    pub fn full_text(&self) -> String {
        match self {
            CellMarkup::Truncated { full, .. } => full.clone(),
            other => other.text(),
        }
    }

    /// Badge tone, if the cell renders as a badge
    pub fn tone(&self) -> Option<Tone> {
        match self {
            CellMarkup::Bool(true) => Some(Tone::Success),
            CellMarkup::Bool(false) => Some(Tone::Secondary),
            CellMarkup::Status { class, .. } => Some(class.tone()),
            CellMarkup::Method { tone, .. } => Some(*tone),
            CellMarkup::JsonBadge => Some(Tone::Info),
            _ => None,
        }
    }

    /// Markers are rendered muted rather than as data
    pub fn is_marker(&self) -> bool {
        matches!(self, CellMarkup::Null | CellMarkup::Empty)
    }
}

// ─────────────────────────────────────────────────────────────────
// Rule table
// ─────────────────────────────────────────────────────────────────

/// Input handed to every rule
pub struct CellInput<'a> {
    pub value: &'a Value,
    /// Lowercased column name
    pub column: &'a str,
    pub options: &'a FormatOptions,
}

/// A named formatting rule; `None` means "does not apply"
pub struct CellRule {
    pub name: &'static str,
    pub apply: fn(&CellInput<'_>) -> Option<CellMarkup>,
}

/// Rules in precedence order; the first match wins
pub const CELL_RULES: &[CellRule] = &[
    CellRule {
        name: "null",
        apply: rule_null,
    },
    CellRule {
        name: "boolean",
        apply: rule_boolean,
    },
    CellRule {
        name: "status_code",
        apply: rule_status_code,
    },
    CellRule {
        name: "http_method",
        apply: rule_http_method,
    },
    CellRule {
        name: "timestamp",
        apply: rule_timestamp,
    },
    CellRule {
        name: "url_or_path",
        apply: rule_url_or_path,
    },
    CellRule {
        name: "json_string",
        apply: rule_json_string,
    },
    CellRule {
        name: "long_text",
        apply: rule_long_text,
    },
    CellRule {
        name: "text",
        apply: rule_text,
    },
];

fn rule_null(input: &CellInput<'_>) -> Option<CellMarkup> {
    input.value.is_null().then_some(CellMarkup::Null)
}

fn rule_boolean(input: &CellInput<'_>) -> Option<CellMarkup> {
    input.value.as_bool().map(CellMarkup::Bool)
}

fn rule_status_code(input: &CellInput<'_>) -> Option<CellMarkup> {
    if !(input.column.contains("status") || input.column.contains("code")) {
        return None;
    }
    let Value::Number(n) = input.value else {
        return None;
    };
    Some(CellMarkup::Status {
        code: display_number(n),
        class: StatusClass::from_code(n.as_f64().unwrap_or(f64::NAN)),
    })
}

fn rule_http_method(input: &CellInput<'_>) -> Option<CellMarkup> {
    if input.column != "method" && input.column != "request_method" {
        return None;
    }
    let verb = display_value(input.value);
    let tone = method_tone(&verb);
    Some(CellMarkup::Method { verb, tone })
}

// Substring match on "at" also catches names such as "status" or "data".
fn rule_timestamp(input: &CellInput<'_>) -> Option<CellMarkup> {
    let column = input.column;
    if !(column.contains("time") || column.contains("at") || column.contains("date")) {
        return None;
    }
    parse_datetime(input.value).map(|dt| CellMarkup::DateTime(input.options.format(&dt)))
}

fn rule_url_or_path(input: &CellInput<'_>) -> Option<CellMarkup> {
    let s = input.value.as_str()?;
    (s.starts_with("http") || s.starts_with('/') || s.contains("://"))
        .then(|| CellMarkup::Code(s.to_string()))
}

fn rule_json_string(input: &CellInput<'_>) -> Option<CellMarkup> {
    let s = input.value.as_str()?;
    if !(s.starts_with('{') || s.starts_with('[')) {
        return None;
    }
    serde_json::from_str::<Value>(s)
        .ok()
        .map(|_| CellMarkup::JsonBadge)
}

fn rule_long_text(input: &CellInput<'_>) -> Option<CellMarkup> {
    input.value.as_str().and_then(truncate_long)
}

fn rule_text(input: &CellInput<'_>) -> Option<CellMarkup> {
    Some(CellMarkup::Text(display_value(input.value)))
}

// ─────────────────────────────────────────────────────────────────
// Entry points
// ─────────────────────────────────────────────────────────────────

/// Format a value with default display options
pub fn format_cell(value: &Value, column: &str) -> CellMarkup {
    format_cell_with(value, column, &FormatOptions::default())
}

/// Format a value by running it through [`CELL_RULES`]
pub fn format_cell_with(value: &Value, column: &str, options: &FormatOptions) -> CellMarkup {
    let column = column.to_lowercase();
    let input = CellInput {
        value,
        column: &column,
        options,
    };
    CELL_RULES
        .iter()
        .find_map(|rule| (rule.apply)(&input))
        .unwrap_or_else(|| CellMarkup::Text(display_value(value)))
}

/// List-view cell: missing values, long strings, structured values and empty
/// strings are decided before the general rule table runs
pub fn render_list_cell(value: Option<&Value>, column: &str, options: &FormatOptions) -> CellMarkup {
    let value = match value {
        None | Some(Value::Null) => return CellMarkup::Null,
        Some(v) => v,
    };

    match value {
        Value::String(s) => {
            if let Some(truncated) = truncate_long(s) {
                return truncated;
            }
            if s.is_empty() {
                return CellMarkup::Empty;
            }
        }
        Value::Object(_) | Value::Array(_) => return CellMarkup::JsonBadge,
        _ => {}
    }

    format_cell_with(value, column, options)
}

// ─────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────

fn truncate_long(s: &str) -> Option<CellMarkup> {
    if s.chars().count() <= TRUNCATE_AT {
        return None;
    }
    let mut shown: String = s.chars().take(TRUNCATE_AT).collect();
    shown.push_str(labels::ELLIPSIS);
    Some(CellMarkup::Truncated {
        shown,
        full: s.to_string(),
    })
}

/// Render a number without a trailing `.0` for integral floats
pub fn display_number(n: &Number) -> String {
    if n.is_f64() {
        n.as_f64()
            .map(display_float)
            .unwrap_or_else(|| n.to_string())
    } else {
        n.to_string()
    }
}

/// Magnitudes outside `[1e-6, 1e21)` switch to exponent notation (`1.5e+300`)
fn display_float(f: f64) -> String {
    let magnitude = f.abs();
    if magnitude == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return format!("{}", f);
    }

    let sci = format!("{:e}", f);
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => sci,
    }
}

/// Plain text of any JSON value
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => labels::NULL_MARKER.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
