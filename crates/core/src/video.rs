//! Video metadata records.
//!
//! The backend returns one JSON array per source. [`WireVideoRecord`] is the
//! loose shape of an array element; [`VideoRecord`] is the normalised,
//! source-tagged value the rest of the client works with.

use serde::Deserialize;

use crate::video_sources::SourceKind;

/// Fixed height of every card preview.
pub const PREVIEW_HEIGHT_PX: u32 = 160;

/// One element of a `retrieve-*-videos-for-date` response.
///
/// Every field is optional on the wire; missing values become empty strings
/// when the record is normalised.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireVideoRecord {
    pub source: Option<String>,
    pub link: Option<String>,
    pub capture_time: Option<String>,
    pub detected_objects: Option<String>,
    pub position: Option<String>,
    pub motion_size: Option<String>,
    pub google_drive_file_id: Option<String>,
    #[serde(rename = "downloadLink")]
    pub download_link: Option<String>,
}

/// A video as shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub source: SourceKind,
    /// Deletion key: file name for local videos, Drive file id otherwise.
    /// Empty when the backend sent no usable key.
    pub identifier: String,
    pub link: String,
    pub capture_time: String,
    pub detected_objects: String,
    pub position: String,
    pub motion_size: String,
    /// Only Drive records carry a separate download URL.
    pub download_link: Option<String>,
}

impl WireVideoRecord {
    /// The `source` the backend claimed, if it sent one.
    pub fn declared_source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl VideoRecord {
    /// Normalise a wire record fetched from the endpoint for `source`.
    ///
    /// The tag always comes from the endpoint, never from the payload.
    pub fn from_wire(source: SourceKind, wire: WireVideoRecord) -> Self {
        let link = wire.link.unwrap_or_default();
        let identifier = match source {
            SourceKind::Local => local_identifier(&link).to_string(),
            SourceKind::GoogleDrive => wire.google_drive_file_id.unwrap_or_default(),
        };
        let download_link = match source {
            SourceKind::Local => None,
            SourceKind::GoogleDrive => wire.download_link.filter(|l| !l.is_empty()),
        };

        Self {
            source,
            identifier,
            link,
            capture_time: wire.capture_time.unwrap_or_default(),
            detected_objects: wire.detected_objects.unwrap_or_default(),
            position: wire.position.unwrap_or_default(),
            motion_size: wire.motion_size.unwrap_or_default(),
            download_link,
        }
    }

    /// Whether the record carries everything needed to delete it.
    ///
    /// Local records need a link (the identifier is its file name); Drive
    /// records need a file id.
    pub fn is_deletable(&self) -> bool {
        match self.source {
            SourceKind::Local => !self.link.is_empty() && !self.identifier.is_empty(),
            SourceKind::GoogleDrive => !self.identifier.is_empty(),
        }
    }

    /// URL offered by the card's Download button, if any.
    pub fn download_url(&self) -> Option<&str> {
        match self.source {
            SourceKind::Local => Some(self.link.as_str()).filter(|l| !l.is_empty()),
            SourceKind::GoogleDrive => self.download_link.as_deref(),
        }
    }

    /// URL loaded by the card's preview widget.
    pub fn preview_src(&self) -> String {
        match self.source {
            SourceKind::Local => self.link.clone(),
            SourceKind::GoogleDrive => preview_url(&self.link),
        }
    }
}

/// File name of a local video: the last `/`-separated segment of its link.
pub fn local_identifier(link: &str) -> &str {
    link.rsplit('/').next().unwrap_or_default()
}

/// Turn a Drive "view" URL into its embeddable "preview" form.
///
/// Only the first `/view` is replaced; links without it pass through.
pub fn preview_url(link: &str) -> String {
    link.replacen("/view", "/preview", 1)
}

/// Combine both sources into the gallery list: Drive records first, then
/// local ones. No sorting and no de-duplication.
pub fn merge_sources(local: Vec<VideoRecord>, drive: Vec<VideoRecord>) -> Vec<VideoRecord> {
    let mut merged = drive;
    merged.extend(local);
    merged
}
