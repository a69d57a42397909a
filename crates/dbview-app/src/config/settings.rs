//! Settings file loading and initialization

use std::path::{Path, PathBuf};

use dbview_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "dbview";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# dbview configuration

[server]
base_url = "http://127.0.0.1:8000"   # table browser API
row_limit = 100                      # rows fetched per table
# request_timeout_ms = 10000         # unset = wait indefinitely

[ui]
datetime_format = "%Y/%m/%d %H:%M:%S"
utc = false
"#;

/// `{config_dir}/dbview/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Write the default config file at `path`, creating parent directories.
///
/// An existing file is left untouched. Returns whether a file was written.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        info!("Config file already exists at {:?}", path);
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {:?}", parent))?;
    }

    std::fs::write(path, DEFAULT_CONFIG).with_context(|| format!("Failed to write {:?}", path))?;
    info!("Wrote default config to {:?}", path);
    Ok(true)
}
