//! Configuration management
//!
//! Settings live in `settings.json` inside the app directory:
//! ```json
//! {
//!   "api": { "baseUrl": "http://127.0.0.1:5000" },
//!   "logging": { "enabled": true }
//! }
//! ```
//! Fields this crate doesn't manage are preserved on save.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::adapters::http_auth::{parse_base_url, DEFAULT_BASE_URL};
use crate::domain::result::Result;

/// Environment variable overriding the configured API base URL
pub const BASE_URL_ENV: &str = "SHUTTER_API_BASE_URL";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    api: ApiSettings,
    #[serde(default)]
    logging: LoggingSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoggingSettings {
    #[serde(default = "default_true")]
    enabled: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

/// Where the effective base URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseUrlSource {
    Default,
    Settings,
    Environment,
    Override,
}

/// Shutter configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub base_url_source: BaseUrlSource,
    pub logging_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            base_url_source: BaseUrlSource::Default,
            logging_enabled: true,
        }
    }
}

fn read_settings(app_dir: &Path) -> Result<SettingsFile> {
    let settings_path = app_dir.join("settings.json");
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&settings_path)?;
    Ok(serde_json::from_str(&content)?)
}

impl Config {
    /// Load config from the app directory
    ///
    /// Base URL precedence: `SHUTTER_API_BASE_URL`, then settings.json,
    /// then the built-in default.
    pub fn load(app_dir: &Path) -> Result<Self> {
        let env_url = std::env::var(BASE_URL_ENV).ok().filter(|v| !v.trim().is_empty());
        Self::load_with(app_dir, env_url.as_deref())
    }

    /// Same as [`Config::load`] with the environment value passed in
    pub fn load_with(app_dir: &Path, env_base_url: Option<&str>) -> Result<Self> {
        let raw = read_settings(app_dir)?;

        let (base_url, base_url_source) = match (env_base_url, raw.api.base_url.as_deref()) {
            (Some(url), _) => (parse_base_url(url)?, BaseUrlSource::Environment),
            (None, Some(url)) => (parse_base_url(url)?, BaseUrlSource::Settings),
            (None, None) => (DEFAULT_BASE_URL.to_string(), BaseUrlSource::Default),
        };

        Ok(Self {
            base_url,
            base_url_source,
            logging_enabled: raw.logging.enabled,
        })
    }

    /// Override the base URL for this process only (e.g. `--base-url`)
    pub fn override_base_url(&mut self, url: &str) -> Result<()> {
        self.base_url = parse_base_url(url)?;
        self.base_url_source = BaseUrlSource::Override;
        Ok(())
    }

    /// Validate and set the base URL to be persisted
    pub fn set_base_url(&mut self, url: &str) -> Result<()> {
        self.base_url = parse_base_url(url)?;
        self.base_url_source = BaseUrlSource::Settings;
        Ok(())
    }

    /// Save config to the app directory
    ///
    /// Only a base URL that came from settings is written back; an env or
    /// flag override never leaks into the file.
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        let settings_path = app_dir.join("settings.json");
        let mut settings = read_settings(app_dir)?;

        if self.base_url_source == BaseUrlSource::Settings {
            settings.api.base_url = Some(self.base_url.clone());
        }
        settings.logging.enabled = self.logging_enabled;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}
