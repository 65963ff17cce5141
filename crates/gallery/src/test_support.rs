//! In-memory backend for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use homewatch_core::video::{local_identifier, WireVideoRecord};
use homewatch_core::{MotionDetectionMode, NotificationPreference, SourceKind};

use crate::api::{GalleryApiError, PreferenceBackend, VideoBackend};

#[derive(Debug, Default)]
struct Store {
    videos: HashMap<(SourceKind, String), Vec<WireVideoRecord>>,
    requested_dates: Vec<String>,
    deleted: Vec<(SourceKind, String)>,
    /// Form bodies of preference posts, e.g. `mode=mgo2`.
    preference_updates: Vec<String>,
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    dates: Vec<String>,
    delete_message: Option<String>,
    fail_reads: bool,
    fail_deletes: bool,
    fail_preferences: bool,
    failing_source: Option<SourceKind>,
    store: Mutex<Store>,
}

fn local_record(link: &str) -> WireVideoRecord {
    WireVideoRecord {
        source: Some("local".into()),
        link: Some(link.into()),
        capture_time: Some("08:30 AM".into()),
        detected_objects: Some("person".into()),
        position: Some("Left".into()),
        motion_size: Some("Small".into()),
        ..Default::default()
    }
}

fn drive_record(file_id: &str) -> WireVideoRecord {
    WireVideoRecord {
        source: Some("google_drive".into()),
        link: Some(format!("https://drive.google.com/file/d/{file_id}/view")),
        google_drive_file_id: Some(file_id.into()),
        download_link: Some(format!(
            "https://drive.google.com/uc?export=download&id={file_id}"
        )),
        capture_time: Some("09:45 PM".into()),
        detected_objects: Some("car".into()),
        position: Some("Right".into()),
        motion_size: Some("Large".into()),
    }
}

impl FakeBackend {
    pub fn with_dates(mut self, dates: &[&str]) -> Self {
        self.dates = dates.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn with_local(self, date: &str, links: &[&str]) -> Self {
        self.push(SourceKind::Local, date, links.iter().map(|l| local_record(l)))
    }

    /// A record on the local endpoint that claims to be a Drive record.
    pub fn with_mislabelled_local(self, date: &str, link: &str) -> Self {
        let mut record = local_record(link);
        record.source = Some("google_drive".into());
        self.push(SourceKind::Local, date, [record])
    }

    pub fn with_drive(self, date: &str, file_ids: &[&str]) -> Self {
        self.push(
            SourceKind::GoogleDrive,
            date,
            file_ids.iter().map(|id| drive_record(id)),
        )
    }

    pub fn with_delete_message(mut self, message: &str) -> Self {
        self.delete_message = Some(message.to_string());
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_deletes(mut self) -> Self {
        self.fail_deletes = true;
        self
    }

    pub fn failing_preferences(mut self) -> Self {
        self.fail_preferences = true;
        self
    }

    pub fn failing_source(mut self, source: SourceKind) -> Self {
        self.failing_source = Some(source);
        self
    }

    /// Dates passed to `videos_for_date`, in call order.
    pub fn requested_dates(&self) -> Vec<String> {
        self.lock().requested_dates.clone()
    }

    pub fn deleted(&self) -> Vec<(SourceKind, String)> {
        self.lock().deleted.clone()
    }

    pub fn preference_updates(&self) -> Vec<String> {
        self.lock().preference_updates.clone()
    }

    fn record_preference(&self, form: String) -> Result<(), GalleryApiError> {
        if self.fail_preferences {
            return Err(GalleryApiError::ApiError {
                status: 500,
                body: r#"{"result": "Camera instance is not available."}"#.into(),
            });
        }
        self.lock().preference_updates.push(form);
        Ok(())
    }

    fn push(
        self,
        source: SourceKind,
        date: &str,
        records: impl IntoIterator<Item = WireVideoRecord>,
    ) -> Self {
        self.lock()
            .videos
            .entry((source, date.to_string()))
            .or_default()
            .extend(records);
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Store> {
        self.store.lock().unwrap()
    }
}

fn identifier_of(source: SourceKind, record: &WireVideoRecord) -> String {
    match source {
        SourceKind::Local => local_identifier(record.link.as_deref().unwrap_or_default()).into(),
        SourceKind::GoogleDrive => record.google_drive_file_id.clone().unwrap_or_default(),
    }
}

impl VideoBackend for FakeBackend {
    async fn available_dates(&self) -> Result<Vec<String>, GalleryApiError> {
        if self.fail_reads {
            return Err(GalleryApiError::ApiError {
                status: 500,
                body: "boom".into(),
            });
        }
        Ok(self.dates.clone())
    }

    async fn videos_for_date(
        &self,
        source: SourceKind,
        date: &str,
    ) -> Result<Vec<WireVideoRecord>, GalleryApiError> {
        let mut store = self.lock();
        store.requested_dates.push(date.to_string());
        if self.fail_reads || self.failing_source == Some(source) {
            return Err(GalleryApiError::ApiError {
                status: 500,
                body: "boom".into(),
            });
        }
        Ok(store
            .videos
            .get(&(source, date.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn delete_video(
        &self,
        source: SourceKind,
        identifier: &str,
    ) -> Result<String, GalleryApiError> {
        if self.fail_deletes {
            return Err(GalleryApiError::ApiError {
                status: 404,
                body: r#"{"error": "Local video file was not found."}"#.into(),
            });
        }
        let mut store = self.lock();
        store.deleted.push((source, identifier.to_string()));
        for ((kind, _), records) in store.videos.iter_mut() {
            if *kind == source {
                records.retain(|r| identifier_of(source, r) != identifier);
            }
        }
        Ok(self
            .delete_message
            .clone()
            .unwrap_or_else(|| "Video deleted successfully.".into()))
    }
}

impl PreferenceBackend for FakeBackend {
    async fn update_notification_preference(
        &self,
        preference: NotificationPreference,
    ) -> Result<String, GalleryApiError> {
        self.record_preference(format!("preference={preference}"))?;
        Ok("Updated notification preference.".into())
    }

    async fn set_motion_detection_mode(
        &self,
        mode: MotionDetectionMode,
    ) -> Result<String, GalleryApiError> {
        self.record_preference(format!("mode={mode}"))?;
        Ok(format!("Mode is set to {mode}"))
    }
}
