//! Video source kinds.
//!
//! Every record shown in the gallery comes from exactly one source. The
//! tag decides how the card previews the video and which endpoint deletes it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A video stored on the camera host's filesystem.
pub const VIDEO_SOURCE_LOCAL: &str = "local";

/// A video uploaded to the user's Google Drive.
pub const VIDEO_SOURCE_GOOGLE_DRIVE: &str = "google_drive";

/// Where a video record lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Local,
    GoogleDrive,
}

impl SourceKind {
    /// Wire name, as used in JSON payloads and the confirm button's
    /// `data-video-type` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => VIDEO_SOURCE_LOCAL,
            Self::GoogleDrive => VIDEO_SOURCE_GOOGLE_DRIVE,
        }
    }

    /// Human-readable label for prompts and log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::GoogleDrive => "Google Drive",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            VIDEO_SOURCE_LOCAL => Ok(Self::Local),
            VIDEO_SOURCE_GOOGLE_DRIVE => Ok(Self::GoogleDrive),
            other => Err(CoreError::UnknownSource(other.to_string())),
        }
    }
}
