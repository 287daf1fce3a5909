//! Image selection types for the home screen

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

/// Reference to a selected image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageUri(String);

impl ImageUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Build a `file://` uri from an absolute path
    ///
    /// Returns `None` for relative paths.
    pub fn from_path(path: &Path) -> Option<Self> {
        Url::from_file_path(path).ok().map(|u| Self(u.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What an image picker hands back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerResponse {
    /// User backed out of the picker
    Cancelled,
    /// Picker reported an error
    Failed(String),
    /// Zero or more picked assets, first one wins
    Picked(Vec<ImageUri>),
}
