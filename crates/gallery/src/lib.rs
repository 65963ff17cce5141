//! Video gallery client for the home surveillance backend.
//!
//! The [`GalleryController`] loads the available dates, fetches local and
//! Google Drive recordings concurrently through a [`VideoBackend`], renders
//! one card per video into a [`GalleryView`] and drives confirmation-gated
//! deletion. [`GalleryApi`] is the reqwest-backed [`VideoBackend`]; it also
//! posts the notification and motion detection preferences.

pub mod api;
pub mod cards;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod deletion;
pub mod error;
pub mod notify;
pub mod preferences;
pub mod render;
pub mod session;
pub mod source;
pub mod view;

#[cfg(test)]
mod test_support;

pub use api::{GalleryApi, GalleryApiError, PreferenceBackend, VideoBackend};
pub use config::ClientConfig;
pub use controller::GalleryController;
pub use deletion::{ConfirmDialog, DeletionOutcome, DeletionTarget, DeletionWorkflow};
pub use error::GalleryError;
pub use notify::{HtmlNotifier, Notifier};
pub use session::Session;
pub use view::{GalleryView, HtmlGallery};
