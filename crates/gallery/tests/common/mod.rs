//! Stub surveillance backend served by axum on an ephemeral port.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use homewatch_gallery::{ClientConfig, GalleryApi, Session};

pub const CSRF_TOKEN: &str = "test-token";

/// Mutable backend contents.
#[derive(Debug, Default)]
pub struct StubData {
    pub dates: Vec<String>,
    /// date -> local records
    pub local: HashMap<String, Vec<Value>>,
    /// date -> Drive records
    pub drive: HashMap<String, Vec<Value>>,
    pub drive_connected: bool,
    /// Every `date` query received, in order.
    pub queried_dates: Vec<String>,
    pub notification_preference: Option<String>,
    pub detection_mode: Option<String>,
    /// The mode route answers 500 when no camera is running.
    pub camera_running: bool,
}

pub type SharedStub = Arc<Mutex<StubData>>;

impl StubData {
    pub fn add_local(&mut self, date: &str, file_name: &str) {
        self.local.entry(date.to_string()).or_default().push(json!({
            "source": "local",
            "link": format!("/static/videos/{file_name}"),
            "capture_time": "08:30 AM",
            "detected_objects": "person",
            "position": "Left",
            "motion_size": "Small",
        }));
    }

    pub fn add_drive(&mut self, date: &str, file_id: &str) {
        self.drive.entry(date.to_string()).or_default().push(json!({
            "source": "google_drive",
            "google_drive_file_id": file_id,
            "link": format!("https://drive.google.com/file/d/{file_id}/view"),
            "downloadLink": format!("https://drive.google.com/uc?export=download&id={file_id}"),
            "capture_time": "09:45 PM",
            "detected_objects": "",
            "position": "Right",
            "motion_size": "Large",
        }));
    }
}

#[derive(Deserialize)]
struct DateQuery {
    date: String,
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn available_dates(State(stub): State<SharedStub>) -> Json<Value> {
    let data = stub.lock().unwrap();
    Json(json!({ "unique_dates": data.dates }))
}

async fn local_videos(
    State(stub): State<SharedStub>,
    Query(q): Query<DateQuery>,
) -> Json<Vec<Value>> {
    let mut data = stub.lock().unwrap();
    data.queried_dates.push(q.date.clone());
    Json(data.local.get(&q.date).cloned().unwrap_or_default())
}

async fn drive_videos(
    State(stub): State<SharedStub>,
    Query(q): Query<DateQuery>,
) -> Json<Vec<Value>> {
    let mut data = stub.lock().unwrap();
    data.queried_dates.push(q.date.clone());
    Json(data.drive.get(&q.date).cloned().unwrap_or_default())
}

fn csrf_ok(headers: &HeaderMap) -> bool {
    headers
        .get("X-CSRFToken")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == CSRF_TOKEN)
}

async fn delete_local(
    State(stub): State<SharedStub>,
    headers: HeaderMap,
    Path(file_name): Path<String>,
) -> Response {
    if !csrf_ok(&headers) {
        return error(StatusCode::BAD_REQUEST, "The CSRF token is missing.");
    }
    let mut data = stub.lock().unwrap();
    let link = format!("/static/videos/{file_name}");
    let mut found = false;
    for records in data.local.values_mut() {
        let before = records.len();
        records.retain(|r| r["link"] != link.as_str());
        found |= records.len() != before;
    }
    if !found {
        return error(StatusCode::NOT_FOUND, "Local video file was not found.");
    }
    Json(json!({ "success": "Video deleted successfully." })).into_response()
}

async fn delete_drive(
    State(stub): State<SharedStub>,
    headers: HeaderMap,
    Path(file_id): Path<String>,
) -> Response {
    if !csrf_ok(&headers) {
        return error(StatusCode::BAD_REQUEST, "The CSRF token is missing.");
    }
    let mut data = stub.lock().unwrap();
    let mut found = false;
    for records in data.drive.values_mut() {
        let before = records.len();
        records.retain(|r| r["google_drive_file_id"] != file_id.as_str());
        found |= records.len() != before;
    }
    if !found {
        return error(StatusCode::NOT_FOUND, "Google Drive video was not found.");
    }
    Json(json!({ "success": "Video deleted successfully from Google Drive." })).into_response()
}

#[derive(Deserialize)]
struct PreferenceForm {
    preference: String,
}

async fn update_notifications(
    State(stub): State<SharedStub>,
    headers: HeaderMap,
    Form(form): Form<PreferenceForm>,
) -> Response {
    if !csrf_ok(&headers) {
        return error(StatusCode::BAD_REQUEST, "The CSRF token is missing.");
    }
    if !["all", "hourly", "none"].contains(&form.preference.as_str()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid notification preference." })),
        )
            .into_response();
    }
    stub.lock().unwrap().notification_preference = Some(form.preference);
    Json(json!({ "message": "Updated notification preference." })).into_response()
}

#[derive(Deserialize)]
struct ModeForm {
    mode: String,
}

async fn setup_motion_detection_mode(
    State(stub): State<SharedStub>,
    headers: HeaderMap,
    Form(form): Form<ModeForm>,
) -> Response {
    if !csrf_ok(&headers) {
        return error(StatusCode::BAD_REQUEST, "The CSRF token is missing.");
    }
    let mut data = stub.lock().unwrap();
    data.detection_mode = Some(form.mode.clone());
    if !data.camera_running {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "result": "Camera instance is not available." })),
        )
            .into_response();
    }
    Json(json!({ "result": format!("Mode is set to {}", form.mode) })).into_response()
}

async fn drive_status(State(stub): State<SharedStub>) -> Json<Value> {
    let data = stub.lock().unwrap();
    Json(json!({ "isConnected": data.drive_connected }))
}

fn router(stub: SharedStub) -> Router {
    Router::new()
        .route("/get-available-dates", get(available_dates))
        .route("/retrieve-local-videos-for-date", get(local_videos))
        .route("/retrieve-google-videos-for-date", get(drive_videos))
        .route("/delete-local-video/{file_name}", delete(delete_local))
        .route("/delete-google-drive-video/{file_id}", delete(delete_drive))
        .route("/api/google-drive/status", get(drive_status))
        .route("/update_notifications", post(update_notifications))
        .route("/setup_motion_detection_mode", post(setup_motion_detection_mode))
        .with_state(stub)
}

/// Serve `data` on `127.0.0.1:0`; returns the base URL and the shared data.
pub async fn spawn_stub(data: StubData) -> (String, SharedStub) {
    let stub = Arc::new(Mutex::new(data));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(stub.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), stub)
}

/// A client for `base_url` carrying the stub's CSRF token.
pub fn api_for(base_url: &str) -> GalleryApi {
    let mut config = ClientConfig::new(base_url);
    config.csrf_token = CSRF_TOKEN.to_string();
    GalleryApi::new(Session::new(&config).unwrap())
}
