//! Terminal implementations of the UI ports

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

use shutter_core::ports::{AlertPresenter, ImageSource};
use shutter_core::{ImageUri, PickerResponse};

/// Spinner shown while a request is pending
///
/// Shared with [`TerminalAlerts`] so an alert can clear it before printing.
#[derive(Clone, Default)]
pub struct Activity(Arc<Mutex<Option<ProgressBar>>>);

impl Activity {
    pub fn start(&self, message: &str) {
        if atty::isnt(atty::Stream::Stderr) {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(spinner);
    }

    pub fn stop(&self) {
        if let Some(spinner) = self.0.lock().unwrap_or_else(PoisonError::into_inner).take() {
            spinner.finish_and_clear();
        }
    }
}

/// Prints alerts; in interactive mode waits for the user to dismiss them
pub struct TerminalAlerts {
    activity: Activity,
    interactive: bool,
    quiet: bool,
}

impl TerminalAlerts {
    pub fn interactive(activity: Activity) -> Self {
        Self {
            activity,
            interactive: true,
            quiet: false,
        }
    }

    /// For one-shot commands; `quiet` suppresses output (JSON mode)
    pub fn one_shot(activity: Activity, quiet: bool) -> Self {
        Self {
            activity,
            interactive: false,
            quiet,
        }
    }
}

impl AlertPresenter for TerminalAlerts {
    fn show_alert(&self, title: &str, message: &str) {
        self.activity.stop();
        if self.quiet {
            return;
        }

        println!();
        if title == "Success" {
            println!("{}", title.green().bold());
        } else {
            println!("{}", title.red().bold());
        }
        if !message.is_empty() {
            println!("{}", message);
        }

        if self.interactive {
            // A failed prompt counts as dismissed
            let _ = Select::new().items(&["OK"]).default(0).interact();
        }
    }
}

/// Image source backed by prompts
///
/// There is no camera in a terminal; the library is a file path.
pub struct TerminalImageSource;

pub const CAMERA_UNAVAILABLE: &str = "Camera capture is not available in the terminal";

/// Resolve a typed path into a picker response
pub fn pick_path(raw: &str) -> PickerResponse {
    let raw = raw.trim();
    if raw.is_empty() {
        return PickerResponse::Cancelled;
    }

    let path = match Path::new(raw).canonicalize() {
        Ok(path) => path,
        Err(e) => return PickerResponse::Failed(format!("{}: {}", raw, e)),
    };
    if !path.is_file() {
        return PickerResponse::Failed(format!("{} is not a file", path.display()));
    }

    match ImageUri::from_path(&path) {
        Some(uri) => PickerResponse::Picked(vec![uri]),
        None => PickerResponse::Failed(format!("Cannot build a file URI for {}", path.display())),
    }
}

#[async_trait]
impl ImageSource for TerminalImageSource {
    async fn request_camera_permission(&self) -> bool {
        Confirm::new()
            .with_prompt("Allow Shutter to use the camera?")
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    async fn pick_from_camera(&self) -> PickerResponse {
        PickerResponse::Failed(CAMERA_UNAVAILABLE.to_string())
    }

    async fn pick_from_gallery(&self) -> PickerResponse {
        let input = Input::<String>::new()
            .with_prompt("Image path (empty to cancel)")
            .allow_empty(true)
            .interact_text();

        match input {
            Ok(raw) => pick_path(&raw),
            Err(e) => PickerResponse::Failed(e.to_string()),
        }
    }
}
