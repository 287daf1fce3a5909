//! Home screen controller - pick an image from the camera or the library

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{ImageUri, PickerResponse, Screen};
use crate::ports::{AlertPresenter, EventSink, ImageSource, LogEvent};

use super::lifecycle::ScreenLifetime;

/// Shown when camera access is refused
pub const CAMERA_PERMISSION_MESSAGE: &str = "Camera permission is required to capture images.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    pub image_uri: Option<ImageUri>,
    /// Whether the camera/library chooser is open
    pub modal_visible: bool,
}

/// Result of one pick attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Selected(ImageUri),
    Cancelled,
    Failed(String),
    PermissionDenied,
    Discarded,
}

pub struct HomeController {
    images: Arc<dyn ImageSource>,
    alerts: Arc<dyn AlertPresenter>,
    events: Arc<dyn EventSink>,
    state: Mutex<HomeState>,
    lifetime: ScreenLifetime,
}

impl HomeController {
    pub fn new(
        images: Arc<dyn ImageSource>,
        alerts: Arc<dyn AlertPresenter>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            images,
            alerts,
            events,
            state: Mutex::new(HomeState::default()),
            lifetime: ScreenLifetime::new(),
        }
    }

    pub fn lifetime(&self) -> ScreenLifetime {
        self.lifetime.clone()
    }

    pub fn state(&self) -> HomeState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn update(&self, apply: impl FnOnce(&mut HomeState)) {
        apply(&mut self.state.lock().unwrap_or_else(PoisonError::into_inner));
    }

    pub fn open_modal(&self) {
        self.update(|s| s.modal_visible = true);
    }

    pub fn close_modal(&self) {
        self.update(|s| s.modal_visible = false);
    }

    pub fn remove_image(&self) {
        self.update(|s| s.image_uri = None);
    }

    /// Ask for camera access, then capture a photo
    pub async fn open_camera(&self) -> PickOutcome {
        let permitted = self.images.request_camera_permission().await;
        if !self.lifetime.is_mounted() {
            return PickOutcome::Discarded;
        }
        if !permitted {
            self.alerts.show_alert(CAMERA_PERMISSION_MESSAGE, "");
            return PickOutcome::PermissionDenied;
        }

        let response = self.images.pick_from_camera().await;
        self.apply(response, "camera")
    }

    /// Pick a photo from the library
    pub async fn select_from_gallery(&self) -> PickOutcome {
        let response = self.images.pick_from_gallery().await;
        self.apply(response, "gallery")
    }

    fn apply(&self, response: PickerResponse, source: &str) -> PickOutcome {
        if !self.lifetime.is_mounted() {
            return PickOutcome::Discarded;
        }

        match response {
            PickerResponse::Cancelled => {
                self.events.record(
                    LogEvent::new("image_pick_cancelled")
                        .with_page(Screen::Home.as_str())
                        .with_command(source),
                );
                PickOutcome::Cancelled
            }
            PickerResponse::Failed(message) => {
                self.events.record(
                    LogEvent::new("image_pick_failed")
                        .with_page(Screen::Home.as_str())
                        .with_command(source)
                        .with_error(message.clone()),
                );
                PickOutcome::Failed(message)
            }
            PickerResponse::Picked(assets) => match assets.into_iter().next() {
                Some(uri) => {
                    self.update(|s| {
                        s.image_uri = Some(uri.clone());
                        s.modal_visible = false;
                    });
                    PickOutcome::Selected(uri)
                }
                // Nothing picked: leave the modal as it is
                None => PickOutcome::Cancelled,
            },
        }
    }
}
