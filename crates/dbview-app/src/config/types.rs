//! Configuration types for dbview
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `ServerSettings` - Where the API lives and how much to fetch
//! - `UiSettings` - Display options

use std::time::Duration;

use serde::{Deserialize, Serialize};

use dbview_core::datetime::DEFAULT_DATETIME_FORMAT;
use dbview_core::{FormatOptions, DEFAULT_ROW_LIMIT};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Apply command-line overrides on top of file settings
    pub fn with_overrides(mut self, base_url: Option<String>, row_limit: Option<u32>) -> Self {
        if let Some(url) = base_url {
            self.server.base_url = url;
        }
        if let Some(limit) = row_limit {
            self.server.row_limit = limit;
        }
        self
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::new(self.ui.datetime_format.clone(), self.ui.utc)
    }
}

/// `[server]` section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL of the table browser API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Rows requested per table fetch
    #[serde(default = "default_row_limit")]
    pub row_limit: u32,

    /// Per-request timeout; unset waits indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            row_limit: default_row_limit(),
            request_timeout_ms: None,
        }
    }
}

impl ServerSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    /// Row limit, never zero
    pub fn effective_row_limit(&self) -> u32 {
        if self.row_limit == 0 {
            DEFAULT_ROW_LIMIT
        } else {
            self.row_limit
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_row_limit() -> u32 {
    DEFAULT_ROW_LIMIT
}

/// `[ui]` section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// strftime pattern for timestamp cells
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,

    /// Show timestamps in UTC instead of local time
    #[serde(default)]
    pub utc: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            datetime_format: default_datetime_format(),
            utc: false,
        }
    }
}

fn default_datetime_format() -> String {
    DEFAULT_DATETIME_FORMAT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.base_url, "http://127.0.0.1:8000");
        assert_eq!(settings.server.row_limit, 100);
        assert_eq!(settings.server.request_timeout(), None);
        assert_eq!(settings.ui.datetime_format, "%Y/%m/%d %H:%M:%S");
        assert!(!settings.ui.utc);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("[server]\nrow_limit = 20\n").unwrap();
        assert_eq!(settings.server.row_limit, 20);
        assert_eq!(settings.server.base_url, "http://127.0.0.1:8000");
        assert_eq!(settings.ui, UiSettings::default());
    }

    #[test]
    fn test_overrides() {
        let settings =
            Settings::default().with_overrides(Some("http://db.local:9000".into()), Some(5));
        assert_eq!(settings.server.base_url, "http://db.local:9000");
        assert_eq!(settings.server.row_limit, 5);

        let untouched = Settings::default().with_overrides(None, None);
        assert_eq!(untouched, Settings::default());
    }

    #[test]
    fn test_request_timeout() {
        let server = ServerSettings {
            request_timeout_ms: Some(2500),
            ..Default::default()
        };
        assert_eq!(server.request_timeout(), Some(Duration::from_millis(2500)));

        let zero = ServerSettings {
            request_timeout_ms: Some(0),
            ..Default::default()
        };
        assert_eq!(zero.request_timeout(), None);
    }

    #[test]
    fn test_zero_row_limit_falls_back() {
        let server = ServerSettings {
            row_limit: 0,
            ..Default::default()
        };
        assert_eq!(server.effective_row_limit(), 100);
    }

    #[test]
    fn test_format_options_from_ui() {
        let settings: Settings = toml::from_str("[ui]\ndatetime_format = \"%H:%M\"\nutc = true\n").unwrap();
        let opts = settings.format_options();
        assert_eq!(opts.datetime_format, "%H:%M");
        assert!(opts.utc);
    }
}
