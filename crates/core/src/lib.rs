//! Domain types and pure logic for the homewatch video gallery.
//!
//! Everything here is free of I/O: record normalisation, source merging,
//! date selection, user preference values and the text helpers used by the
//! card renderer.

pub mod dates;
pub mod error;
pub mod formatting;
pub mod preferences;
pub mod video;
pub mod video_sources;

pub use error::CoreError;
pub use preferences::{MotionDetectionMode, NotificationPreference};
pub use video::VideoRecord;
pub use video_sources::SourceKind;
