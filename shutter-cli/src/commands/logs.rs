//! Logs command - view and manage the event log

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use serde::Serialize;

use shutter_core::services::logging::now_ms;
use shutter_core::{EntryPoint, LoggingService};

use super::get_app_dir;
use crate::output;

#[derive(Subcommand)]
pub enum LogsCommands {
    /// Show recent log entries
    List {
        /// Number of entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
        /// Show only errors
        #[arg(long)]
        errors: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear old log entries
    Clear {
        /// Delete logs older than N days
        #[arg(long, default_value = "30")]
        older_than_days: u64,
        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy the log database to a file for troubleshooting
    Export {
        /// Destination path
        output: PathBuf,
    },
    /// Show log statistics and database path
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

fn get_logging_service() -> Result<LoggingService> {
    let app_dir = get_app_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    Ok(LoggingService::new(&app_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION"))?)
}

/// Timestamp before which `logs clear` deletes entries
fn cutoff_ms(now: i64, older_than_days: u64) -> Result<i64> {
    i64::try_from(older_than_days)
        .ok()
        .and_then(|days| days.checked_mul(DAY_MS))
        .and_then(|age| now.checked_sub(age))
        .with_context(|| format!("--older-than-days is too large: {}", older_than_days))
}

#[derive(Serialize)]
struct LogStats {
    total_entries: u64,
    error_count: u64,
    database_path: PathBuf,
    database_size_bytes: u64,
}

fn format_timestamp(timestamp_ms: i64) -> String {
    use chrono::{TimeZone, Utc};
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

pub fn run(command: LogsCommands) -> Result<()> {
    match command {
        LogsCommands::List { limit, errors, json } => {
            let service = get_logging_service()?;
            let entries = if errors {
                service.get_errors(limit)?
            } else {
                service.get_recent(limit)?
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }

            if entries.is_empty() {
                println!("No log entries found.");
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["Time", "Event", "Page", "Context", "Error"]);

            for entry in &entries {
                let context = [entry.endpoint.as_deref(), entry.command.as_deref()]
                    .iter()
                    .filter_map(|&s| s)
                    .collect::<Vec<_>>()
                    .join(", ");

                let error = match (&entry.error_message, &entry.error_details) {
                    (Some(msg), Some(details)) => format!("{} ({})", msg, details).red().to_string(),
                    (Some(msg), None) => msg.red().to_string(),
                    _ => String::new(),
                };

                table.add_row(vec![
                    format_timestamp(entry.timestamp),
                    entry.event.clone(),
                    entry.page.clone().unwrap_or_default(),
                    context,
                    error,
                ]);
            }

            println!("{}", table);
        }
        LogsCommands::Clear {
            older_than_days,
            force,
            json,
        } => {
            let cutoff_ms = cutoff_ms(now_ms(), older_than_days)?;
            let service = get_logging_service()?;

            if !force && !json {
                use dialoguer::Confirm;
                if !Confirm::new()
                    .with_prompt(format!("Delete logs older than {} days?", older_than_days))
                    .default(false)
                    .interact()?
                {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let deleted = service.delete_before(cutoff_ms)?;

            if json {
                println!("{}", serde_json::json!({ "deleted": deleted }));
            } else {
                output::success(&format!("Deleted {} log entries", deleted));
            }
        }
        LogsCommands::Export { output: path } => {
            let service = get_logging_service()?;
            let written = service.export(&path)?;
            output::success(&format!("Exported logs to {}", written.display()));
        }
        LogsCommands::Stats { json } => {
            let service = get_logging_service()?;
            let total = service.count()?;
            let errors = service.count_errors()?;
            let db_path = service.db_path().to_path_buf();
            let size_bytes = std::fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);

            if json {
                let stats = LogStats {
                    total_entries: total,
                    error_count: errors,
                    database_path: db_path,
                    database_size_bytes: size_bytes,
                };
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{}", "Log Statistics".bold());
                println!("  Total entries: {}", total);
                println!("  Errors: {}", errors);
                println!("  Database: {}", db_path.display());
                println!("  Size: {}", output::format_size(size_bytes));
            }
        }
    }

    Ok(())
}
