//! dbview - terminal viewer for the SQLite table browser JSON API
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use dbview_api::HttpTableApi;
use dbview_app::config::{self, Settings};
use dbview_app::AppState;
use dbview_core::{logging, prelude::*};

/// dbview - browse the tables of a SQLite viewer server from the terminal
#[derive(Parser, Debug)]
#[command(name = "dbview", version)]
#[command(about = "Terminal viewer for the SQLite table browser API", long_about = None)]
struct Args {
    /// Path to config.toml (default: {config_dir}/dbview/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the API server, overrides the config file
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Rows fetched per table, overrides the config file
    #[arg(long, value_name = "N")]
    limit: Option<u32>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(config::default_config_path)
    }

    fn settings(&self) -> Settings {
        let settings = match self.config_path() {
            Some(path) => config::load_settings(&path),
            None => {
                warn!("No config directory available, using defaults");
                Settings::default()
            }
        };
        settings.with_overrides(self.url.clone(), self.limit)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        return init_config(&args);
    }

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    let settings = args.settings();
    info!(
        "Server: {} (row_limit={})",
        settings.server.base_url,
        settings.server.effective_row_limit()
    );

    let api = HttpTableApi::with_timeout(
        settings.server.base_url.clone(),
        settings.server.request_timeout(),
    )
    .context("Failed to create API client")?;
    let state = AppState::with_settings(&settings);

    let result = dbview_tui::run(state, api).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("dbview exiting");
    result
}

fn init_config(args: &Args) -> Result<()> {
    let path = args
        .config_path()
        .ok_or_else(|| Error::config("No config directory available; pass --config"))?;

    if config::init_config_file(&path)? {
        println!("Wrote default config to {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_overrides() {
        let args = Args::try_parse_from([
            "dbview",
            "--url",
            "http://db.local:9000",
            "--limit",
            "25",
        ])
        .unwrap();
        assert_eq!(args.url.as_deref(), Some("http://db.local:9000"));
        assert_eq!(args.limit, Some(25));
        assert!(!args.init_config);
    }

    #[test]
    fn test_overrides_apply_over_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nbase_url = \"http://file:1\"\nrow_limit = 10\n",
        )
        .unwrap();

        let args = Args::try_parse_from([
            "dbview",
            "--config",
            path.to_str().unwrap(),
            "--limit",
            "5",
        ])
        .unwrap();
        let settings = args.settings();

        assert_eq!(settings.server.base_url, "http://file:1");
        assert_eq!(settings.server.row_limit, 5);
    }

    #[test]
    fn test_rejects_non_numeric_limit() {
        assert!(Args::try_parse_from(["dbview", "--limit", "lots"]).is_err());
    }
}
