//! REST client for the surveillance backend's gallery endpoints.
//!
//! [`GalleryApi`] wraps the fixed JSON contract (date listing, per-source
//! video listing, per-source deletion, and the two preference forms) using
//! [`reqwest`]. Components depend on the [`VideoBackend`] and
//! [`PreferenceBackend`] traits rather than on the HTTP client directly.

use std::future::Future;

use homewatch_core::video::WireVideoRecord;
use homewatch_core::{MotionDetectionMode, NotificationPreference, SourceKind};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::session::Session;

/// Header carrying the anti-forgery token on mutating requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

const PATH_AVAILABLE_DATES: &str = "get-available-dates";
const PATH_DRIVE_STATUS: &[&str] = &["api", "google-drive", "status"];
const PATH_UPDATE_NOTIFICATIONS: &str = "update_notifications";
const PATH_MOTION_DETECTION_MODE: &str = "setup_motion_detection_mode";

/// Listing endpoint for a source.
pub fn list_path(source: SourceKind) -> &'static str {
    match source {
        SourceKind::Local => "retrieve-local-videos-for-date",
        SourceKind::GoogleDrive => "retrieve-google-videos-for-date",
    }
}

/// Deletion endpoint for a source; the identifier is appended as a segment.
pub fn delete_path(source: SourceKind) -> &'static str {
    match source {
        SourceKind::Local => "delete-local-video",
        SourceKind::GoogleDrive => "delete-google-drive-video",
    }
}

/// Response of `GET /get-available-dates`.
#[derive(Debug, Deserialize)]
pub struct AvailableDatesResponse {
    #[serde(default)]
    pub unique_dates: Vec<String>,
}

/// Response of a successful `DELETE /delete-*-video/{identifier}`.
#[derive(Debug, Deserialize)]
pub struct DeleteResponse {
    /// Human-readable confirmation shown in the success toast.
    pub success: String,
}

/// Response of `GET /api/google-drive/status`.
#[derive(Debug, Deserialize)]
pub struct DriveStatusResponse {
    #[serde(rename = "isConnected")]
    pub is_connected: bool,
}

/// Response of `POST /update_notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationUpdateResponse {
    pub message: String,
}

/// Response of `POST /setup_motion_detection_mode`.
#[derive(Debug, Deserialize)]
pub struct DetectionModeResponse {
    pub result: String,
}

/// Body the backend sends with non-2xx responses. The gallery routes use
/// `error`; the preference routes reuse their `message` / `result` key.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "message", alias = "result")]
    error: String,
}

/// Errors from the gallery REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum GalleryApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("Backend API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The client could not be configured.
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl GalleryApiError {
    /// The backend's own `error` message, when the body carries one.
    pub fn backend_message(&self) -> Option<String> {
        match self {
            Self::ApiError { body, .. } => serde_json::from_str::<ErrorBody>(body)
                .ok()
                .map(|b| b.error),
            _ => None,
        }
    }
}

/// The backend contract the gallery components depend on.
pub trait VideoBackend: Send + Sync {
    /// All dates for which videos exist, in backend order.
    fn available_dates(
        &self,
    ) -> impl Future<Output = Result<Vec<String>, GalleryApiError>> + Send;

    /// Raw records of one source for a `YYYY-MM-DD` date.
    fn videos_for_date(
        &self,
        source: SourceKind,
        date: &str,
    ) -> impl Future<Output = Result<Vec<WireVideoRecord>, GalleryApiError>> + Send;

    /// Delete one video; returns the backend's success message.
    fn delete_video(
        &self,
        source: SourceKind,
        identifier: &str,
    ) -> impl Future<Output = Result<String, GalleryApiError>> + Send;
}

/// Preference updates exposed next to the gallery.
pub trait PreferenceBackend: Send + Sync {
    /// Store the email notification preference; returns the backend's message.
    fn update_notification_preference(
        &self,
        preference: NotificationPreference,
    ) -> impl Future<Output = Result<String, GalleryApiError>> + Send;

    /// Switch the camera's motion detection algorithm; returns the backend's
    /// message.
    fn set_motion_detection_mode(
        &self,
        mode: MotionDetectionMode,
    ) -> impl Future<Output = Result<String, GalleryApiError>> + Send;
}

/// HTTP client for one backend.
#[derive(Debug, Clone)]
pub struct GalleryApi {
    session: Session,
}

impl GalleryApi {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Whether the user's Google Drive is enabled and connected.
    ///
    /// Sends `GET /api/google-drive/status`.
    pub async fn drive_status(&self) -> Result<bool, GalleryApiError> {
        let response = self
            .session
            .client()
            .get(self.session.endpoint(PATH_DRIVE_STATUS))
            .send()
            .await?;

        let status: DriveStatusResponse = Self::read_json(response).await?;
        Ok(status.is_connected)
    }

    /// `POST` an urlencoded form to `path` with the anti-forgery header.
    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, GalleryApiError> {
        let response = self
            .session
            .client()
            .post(self.session.endpoint(&[path]))
            .header(CSRF_HEADER, self.session.csrf_token())
            .form(form)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Decode the JSON body of a 2xx response.
    ///
    /// Any other status becomes [`GalleryApiError::ApiError`] with the raw
    /// body kept for [`GalleryApiError::backend_message`].
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GalleryApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => format!("<body not readable: {e}>"),
        };
        tracing::debug!(status = status.as_u16(), %body, "Backend rejected request");
        Err(GalleryApiError::ApiError {
            status: status.as_u16(),
            body,
        })
    }
}

impl VideoBackend for GalleryApi {
    /// Sends `GET /get-available-dates`.
    async fn available_dates(&self) -> Result<Vec<String>, GalleryApiError> {
        let response = self
            .session
            .client()
            .get(self.session.endpoint(&[PATH_AVAILABLE_DATES]))
            .send()
            .await?;

        let body: AvailableDatesResponse = Self::read_json(response).await?;
        tracing::debug!(count = body.unique_dates.len(), "Fetched available dates");
        Ok(body.unique_dates)
    }

    /// Sends `GET /retrieve-{local,google}-videos-for-date?date=…`.
    async fn videos_for_date(
        &self,
        source: SourceKind,
        date: &str,
    ) -> Result<Vec<WireVideoRecord>, GalleryApiError> {
        let response = self
            .session
            .client()
            .get(self.session.endpoint(&[list_path(source)]))
            .query(&[("date", date)])
            .send()
            .await?;

        let records: Vec<WireVideoRecord> = Self::read_json(response).await?;
        tracing::debug!(%source, date, count = records.len(), "Fetched videos");
        Ok(records)
    }

    /// Sends `DELETE /delete-{local,google-drive}-video/{identifier}` with
    /// the anti-forgery header.
    async fn delete_video(
        &self,
        source: SourceKind,
        identifier: &str,
    ) -> Result<String, GalleryApiError> {
        let response = self
            .session
            .client()
            .delete(self.session.endpoint(&[delete_path(source), identifier]))
            .header(CSRF_HEADER, self.session.csrf_token())
            .send()
            .await?;

        let body: DeleteResponse = Self::read_json(response).await?;
        tracing::info!(%source, identifier, "Video deleted");
        Ok(body.success)
    }
}

impl PreferenceBackend for GalleryApi {
    /// Sends `POST /update_notifications` with `preference=…`.
    async fn update_notification_preference(
        &self,
        preference: NotificationPreference,
    ) -> Result<String, GalleryApiError> {
        let body: NotificationUpdateResponse = self
            .post_form(PATH_UPDATE_NOTIFICATIONS, &[("preference", preference.as_str())])
            .await?;
        tracing::info!(%preference, "Notification preference updated");
        Ok(body.message)
    }

    /// Sends `POST /setup_motion_detection_mode` with `mode=…`.
    async fn set_motion_detection_mode(
        &self,
        mode: MotionDetectionMode,
    ) -> Result<String, GalleryApiError> {
        let body: DetectionModeResponse = self
            .post_form(PATH_MOTION_DETECTION_MODE, &[("mode", mode.as_str())])
            .await?;
        tracing::info!(%mode, "Motion detection mode updated");
        Ok(body.result)
    }
}
