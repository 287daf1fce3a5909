//! CLI command implementations

pub mod app;
pub mod config;
pub mod login;
pub mod logs;
pub mod signup;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use dialoguer::{Input, Password};
use serde::Serialize;
use tokio::runtime::Runtime;

use shutter_core::config::Config;
use shutter_core::services::SubmitOutcome;
use shutter_core::{EntryPoint, ShutterContext};

/// Get the shutter directory from environment or default
pub fn get_app_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SHUTTER_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".shutter"))
}

/// Load settings, applying a `--base-url` override
pub fn get_config(base_url: Option<&str>) -> Result<(PathBuf, Config)> {
    let app_dir = get_app_dir()?;
    std::fs::create_dir_all(&app_dir)
        .with_context(|| format!("Failed to create shutter directory: {:?}", app_dir))?;

    let mut config = Config::load(&app_dir).context("Failed to load settings.json")?;
    if let Some(url) = base_url {
        config
            .override_base_url(url)
            .with_context(|| format!("Invalid --base-url: {}", url))?;
    }
    Ok((app_dir, config))
}

/// Get shutter context
pub fn get_context(base_url: Option<&str>) -> Result<ShutterContext> {
    let (app_dir, config) = get_config(base_url)?;
    ShutterContext::new(&app_dir, config, EntryPoint::Cli)
        .context("Failed to initialize shutter context")
}

/// Single-threaded runtime the controllers are driven on
pub fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

/// Prompt for a text field, or take it from the flag when given
pub fn text_field(prompt: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if atty::isnt(atty::Stream::Stdin) => read_stdin_line(),
        None => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
    }
}

/// Prompt for a hidden field; piped input is read line by line
pub fn secret_field(prompt: &str) -> Result<String> {
    if atty::isnt(atty::Stream::Stdin) {
        return read_stdin_line();
    }
    Ok(Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?)
}

fn read_stdin_line() -> Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// JSON shape of a one-shot login/signup
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct OutcomeReport {
    pub success: bool,
    pub error: Option<String>,
}

impl From<&SubmitOutcome> for OutcomeReport {
    fn from(outcome: &SubmitOutcome) -> Self {
        let error = match outcome {
            SubmitOutcome::Navigated(_) => None,
            SubmitOutcome::Rejected(e) => Some(e.message().to_string()),
            SubmitOutcome::Failed(message) => Some(message.clone()),
            SubmitOutcome::Ignored | SubmitOutcome::Discarded => {
                Some("The request did not complete".to_string())
            }
        };
        Self {
            success: error.is_none(),
            error,
        }
    }
}

/// Print the outcome of a one-shot submission and pick the exit code
pub fn report_outcome(outcome: &SubmitOutcome, json: bool) -> Result<ExitCode> {
    let report = OutcomeReport::from(outcome);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(if report.success { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
