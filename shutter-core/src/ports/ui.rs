//! UI collaborator ports
//!
//! Controllers get these injected instead of reaching for global
//! navigation or dialog state.

use async_trait::async_trait;

use crate::domain::{PickerResponse, Screen};

/// Moves between screens
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, screen: Screen);
}

/// Shows a dialog and returns once the user acknowledged it
pub trait AlertPresenter: Send + Sync {
    fn show_alert(&self, title: &str, message: &str);
}

/// Camera and photo library access for the home screen
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Ask for camera access, `true` if granted
    async fn request_camera_permission(&self) -> bool;

    async fn pick_from_camera(&self) -> PickerResponse;

    async fn pick_from_gallery(&self) -> PickerResponse;
}
