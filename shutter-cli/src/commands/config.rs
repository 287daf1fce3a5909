//! Config command - show and change settings.json

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use serde::Serialize;

use shutter_core::config::{BaseUrlSource, Config, BASE_URL_ENV};

use super::{get_app_dir, get_config};
use crate::output;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save the auth API base URL to settings.json
    SetBaseUrl {
        /// Base URL, e.g. http://10.0.2.2:5000
        url: String,
    },
}

/// JSON shape of `config show`
#[derive(Debug, Serialize)]
struct ConfigReport {
    app_dir: PathBuf,
    settings_path: PathBuf,
    base_url: String,
    base_url_source: BaseUrlSource,
    logging_enabled: bool,
}

impl ConfigReport {
    fn new(app_dir: &Path, config: &Config) -> Self {
        Self {
            app_dir: app_dir.to_path_buf(),
            settings_path: app_dir.join("settings.json"),
            base_url: config.base_url.clone(),
            base_url_source: config.base_url_source,
            logging_enabled: config.logging_enabled,
        }
    }
}

fn source_label(source: BaseUrlSource) -> &'static str {
    match source {
        BaseUrlSource::Default => "default",
        BaseUrlSource::Settings => "settings.json",
        BaseUrlSource::Environment => BASE_URL_ENV,
        BaseUrlSource::Override => "--base-url",
    }
}

pub fn run(command: ConfigCommands, base_url: Option<&str>) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            let (app_dir, config) = get_config(base_url)?;
            let settings_path = app_dir.join("settings.json");

            if json {
                let report = ConfigReport::new(&app_dir, &config);
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["Setting", "Value"]);
            table.add_row(vec![
                "Base URL".to_string(),
                format!("{} ({})", config.base_url, source_label(config.base_url_source)),
            ]);
            table.add_row(vec![
                "Logging".to_string(),
                if config.logging_enabled { "enabled" } else { "disabled" }.to_string(),
            ]);
            table.add_row(vec!["Directory".to_string(), app_dir.display().to_string()]);
            table.add_row(vec!["Settings".to_string(), settings_path.display().to_string()]);
            println!("{}", table);
        }
        ConfigCommands::SetBaseUrl { url } => {
            let app_dir = get_app_dir()?;
            std::fs::create_dir_all(&app_dir)?;
            let mut config = Config::load_with(&app_dir, None)?;
            config.set_base_url(&url)?;
            config.save(&app_dir)?;

            output::success(&format!("Base URL set to {}", config.base_url));
            if std::env::var(BASE_URL_ENV).is_ok() {
                output::warning(&format!(
                    "{} is set and takes precedence over settings.json",
                    BASE_URL_ENV
                ));
            }
            if base_url.is_some() {
                println!("{}", "--base-url only applies to the current command".dimmed());
            }
        }
    }

    Ok(())
}
