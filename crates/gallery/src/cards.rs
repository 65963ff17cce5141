//! Video card rendering.
//!
//! [`render_card`] is a pure function of a [`VideoRecord`]. Both sources
//! share the same card shape; only the preview widget and the download URL
//! differ.

use homewatch_core::formatting::{detected_label, title_case};
use homewatch_core::video::PREVIEW_HEIGHT_PX;
use homewatch_core::{SourceKind, VideoRecord};

use crate::deletion::DeletionTarget;
use crate::render::Element;

/// Text of the placeholder mounted when a date has no videos.
pub const NO_VIDEOS_MESSAGE: &str = "Videos are unavailable.";

/// Attribute carrying the deletion key on Delete / confirm buttons.
pub const ATTR_VIDEO_IDENTIFIER: &str = "data-video-identifier";

/// Attribute carrying the source kind on Delete / confirm buttons.
pub const ATTR_VIDEO_TYPE: &str = "data-video-type";

/// A rendered card plus the delete action its button triggers.
///
/// The action lives with the card so no two cards ever share a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
    pub element: Element,
    /// `None` when the record is malformed and no Delete button was drawn.
    pub delete_action: Option<DeletionTarget>,
}

/// Build the card for one video.
pub fn render_card(video: &VideoRecord) -> VideoCard {
    let delete_action = DeletionTarget::for_video(video);

    let element = Element::new("div")
        .class("card mr-2")
        .style("width: 20rem;")
        .attr("data-source", video.source.as_str())
        .child(card_header(video))
        .child(card_body(video))
        .child(controls(video, delete_action.as_ref()));

    VideoCard {
        element,
        delete_action,
    }
}

/// The "no videos" placeholder.
pub fn render_placeholder() -> Element {
    Element::new("p").class("text-muted").text(NO_VIDEOS_MESSAGE)
}

/// `<option>` list for the date selector, newest first as given.
pub fn render_date_options(dates: &[String], selected: &str) -> Vec<Element> {
    dates
        .iter()
        .map(|date| {
            let option = Element::new("option").attr("value", date.as_str()).text(date.as_str());
            if date == selected {
                option.flag("selected")
            } else {
                option
            }
        })
        .collect()
}

fn card_header(video: &VideoRecord) -> Element {
    Element::new("div")
        .class("card-header d-flex justify-content-between")
        .child(Element::new("span").text(detected_label(&video.detected_objects)))
        .child(Element::new("span").text(video.capture_time.as_str()))
}

fn card_body(video: &VideoRecord) -> Element {
    let (container_class, preview) = match video.source {
        SourceKind::Local => (
            "local-video-container d-flex justify-content-center align-items-center pt-4 px-4",
            Element::new("video")
                .attr("src", video.preview_src())
                .class("w-100")
                .flag("controls")
                .style(&format!("height: {PREVIEW_HEIGHT_PX}px; width: 100%;")),
        ),
        SourceKind::GoogleDrive => (
            "video-container-small-activity d-flex justify-content-center align-items-center pt-4 px-4",
            Element::new("iframe")
                .attr("src", video.preview_src())
                .class("w-100 border-0")
                .style(&format!("height: {PREVIEW_HEIGHT_PX}px;"))
                .attr("allow", "autoplay"),
        ),
    };

    Element::new("div")
        .class("card-body p-0")
        .child(Element::new("div").class(container_class).child(preview))
}

fn controls(video: &VideoRecord, delete_action: Option<&DeletionTarget>) -> Element {
    let metadata = Element::new("div")
        .class("video-metadata d-flex flex-column align-items-start")
        .child(
            Element::new("span").text(format!("Detected: {}", title_case(&video.detected_objects))),
        )
        .child(Element::new("span").text(format!("Position: {}", video.position)))
        .child(Element::new("span").text(format!("Size: {}", video.motion_size)));

    let mut buttons =
        Element::new("div").class("button-container d-flex flex-column align-items-end");

    if let Some(url) = video.download_url() {
        buttons = buttons.child(
            Element::new("a")
                .attr("href", url)
                .class("btn btn-secondary btn-sm mb-2 btn-fixed-width")
                .flag("download")
                .text("Download"),
        );
    }

    if let Some(target) = delete_action {
        buttons = buttons.child(delete_button(target));
    }

    Element::new("div")
        .class("video-controls mt-4 d-flex justify-content-between px-4 pb-4")
        .child(metadata)
        .child(buttons)
}

fn delete_button(target: &DeletionTarget) -> Element {
    Element::new("button")
        .attr("type", "button")
        .class("btn btn-danger btn-sm btn-fixed-width")
        .attr(ATTR_VIDEO_IDENTIFIER, target.identifier.as_str())
        .attr(ATTR_VIDEO_TYPE, target.source.as_str())
        .text("Delete")
}
