//! The surface the gallery renders into.
//!
//! [`GalleryView`] is the fixed contract between the controller and
//! whatever shows the gallery: a date selector, a card container that is
//! always cleared before being refilled, and the delete confirmation modal.
//! [`HtmlGallery`] keeps everything in memory and serialises to a page.

use crate::cards::{render_date_options, VideoCard, ATTR_VIDEO_IDENTIFIER, ATTR_VIDEO_TYPE};
use crate::deletion::DeletionTarget;
use crate::render::Element;

/// What the controller mounts into the card container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountedNode {
    Card(VideoCard),
    Placeholder(Element),
}

pub trait GalleryView {
    /// Replace the date selector's options and select `selected`.
    fn set_dates(&mut self, dates: &[String], selected: &str);

    /// Remove every card and placeholder.
    fn clear(&mut self);

    fn mount(&mut self, node: MountedNode);

    /// Show the confirmation modal for `target`.
    fn show_confirmation(&mut self, target: &DeletionTarget);

    fn hide_confirmation(&mut self);
}

/// In-memory gallery that renders to a standalone HTML page.
#[derive(Debug, Default)]
pub struct HtmlGallery {
    dates: Vec<String>,
    selected_date: String,
    nodes: Vec<MountedNode>,
    /// Target held by the modal's confirm button while it is open.
    confirming: Option<DeletionTarget>,
}

impl HtmlGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    pub fn nodes(&self) -> &[MountedNode] {
        &self.nodes
    }

    pub fn cards(&self) -> impl Iterator<Item = &VideoCard> {
        self.nodes.iter().filter_map(|n| match n {
            MountedNode::Card(card) => Some(card),
            MountedNode::Placeholder(_) => None,
        })
    }

    pub fn placeholder_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, MountedNode::Placeholder(_)))
            .count()
    }

    pub fn confirming(&self) -> Option<&DeletionTarget> {
        self.confirming.as_ref()
    }

    /// The date `<select>`.
    pub fn date_selector(&self) -> Element {
        render_date_options(&self.dates, &self.selected_date)
            .into_iter()
            .fold(
                Element::new("select").id("date-selector").class("form-select"),
                Element::child,
            )
    }

    /// The scrolling card container with everything mounted.
    pub fn container(&self) -> Element {
        self.nodes.iter().fold(
            Element::new("div").class("video-scrolling-container d-flex"),
            |container, node| match node {
                MountedNode::Card(card) => container.child(card.element.clone()),
                MountedNode::Placeholder(el) => container.child(el.clone()),
            },
        )
    }

    /// The delete confirmation modal; its confirm button carries the
    /// pending target while the modal is open.
    pub fn confirmation_modal(&self) -> Element {
        let mut confirm = Element::new("button")
            .attr("type", "button")
            .id("confirmDeletionButton")
            .class("btn btn-danger")
            .text("Delete");
        let mut modal_class = "modal fade";
        if let Some(target) = &self.confirming {
            confirm = confirm
                .attr(ATTR_VIDEO_IDENTIFIER, target.identifier.as_str())
                .attr(ATTR_VIDEO_TYPE, target.source.as_str());
            modal_class = "modal fade show";
        }

        Element::new("div")
            .class(modal_class)
            .id("confirmationDeleteModal")
            .attr("tabindex", "-1")
            .child(
                Element::new("div").class("modal-dialog").child(
                    Element::new("div")
                        .class("modal-content")
                        .child(
                            Element::new("div")
                                .class("modal-body")
                                .text("Are you sure you want to delete this video?"),
                        )
                        .child(
                            Element::new("div")
                                .class("modal-footer")
                                .child(
                                    Element::new("button")
                                        .attr("type", "button")
                                        .class("btn btn-secondary")
                                        .attr("data-bs-dismiss", "modal")
                                        .text("Cancel"),
                                )
                                .child(confirm),
                        ),
                ),
            )
    }

    /// A complete HTML document for the current state.
    ///
    /// `toasts` are placed in the toast container; `csrf_token` is exposed
    /// through the usual `csrf-token` meta tag.
    pub fn to_page(&self, csrf_token: &str, toasts: Vec<Element>) -> String {
        let toast_container = toasts.into_iter().fold(
            Element::new("div")
                .id("toast-message-container")
                .class("toast-container position-fixed bottom-0 end-0 p-3"),
            Element::child,
        );

        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(Element::new("meta").attr("name", "csrf-token").attr("content", csrf_token))
            .child(Element::new("title").text("Activity"));

        let body = Element::new("body")
            .child(
                Element::new("div")
                    .class("container-fluid")
                    .child(
                        Element::new("label")
                            .attr("for", "date-selector")
                            .text("Select date"),
                    )
                    .child(self.date_selector())
                    .child(self.container()),
            )
            .child(self.confirmation_modal())
            .child(toast_container);

        let html = Element::new("html").attr("lang", "en").child(head).child(body);
        format!("<!doctype html>\n{}\n", html.to_html())
    }
}

impl GalleryView for HtmlGallery {
    fn set_dates(&mut self, dates: &[String], selected: &str) {
        self.dates = dates.to_vec();
        self.selected_date = selected.to_string();
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn mount(&mut self, node: MountedNode) {
        self.nodes.push(node);
    }

    fn show_confirmation(&mut self, target: &DeletionTarget) {
        self.confirming = Some(target.clone());
    }

    fn hide_confirmation(&mut self) {
        self.confirming = None;
    }
}
