//! User preferences adjustable next to the gallery.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// How often motion alerts are emailed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPreference {
    /// One email per detection.
    #[default]
    All,
    /// An hourly digest.
    Hourly,
    #[serde(rename = "none")]
    Off,
}

impl NotificationPreference {
    pub const ALL: [Self; 3] = [Self::All, Self::Hourly, Self::Off];

    /// Form value sent to the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Hourly => "hourly",
            Self::Off => "none",
        }
    }

    /// Capitalised form value, as shown to the user.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Hourly => "Hourly",
            Self::Off => "None",
        }
    }
}

impl fmt::Display for NotificationPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationPreference {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "'{s}' is not a notification preference (expected all, hourly or none)"
                ))
            })
    }
}

/// Motion detection algorithm run by the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionDetectionMode {
    Mgo2,
    LucasKanadeOrb,
    Mckenna,
}

impl MotionDetectionMode {
    pub const ALL: [Self; 3] = [Self::Mgo2, Self::LucasKanadeOrb, Self::Mckenna];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mgo2 => "mgo2",
            Self::LucasKanadeOrb => "lucas_kanade_orb",
            Self::Mckenna => "mckenna",
        }
    }
}

impl fmt::Display for MotionDetectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotionDetectionMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "'{s}' is not a detection mode (expected mgo2, lucas_kanade_orb or mckenna)"
                ))
            })
    }
}
