//! User notifications: transient toasts and blocking alerts.

use std::sync::Mutex;

use crate::render::Element;

/// Toast auto-hide delay, written to the toast's `data-bs-delay`.
pub const TOAST_DELAY_MS: u64 = 3000;

/// Sink for user-visible messages.
pub trait Notifier {
    /// Transient success message.
    fn toast(&self, message: &str);

    /// Blocking error message.
    fn alert(&self, message: &str);
}

/// Build the markup of a success toast.
pub fn toast_element(toast_id: &str, message: &str) -> Element {
    Element::new("div")
        .class("toast align-items-center toast-success-color")
        .id(toast_id)
        .attr("role", "alert")
        .attr("aria-live", "assertive")
        .attr("aria-atomic", "true")
        .attr("data-bs-delay", TOAST_DELAY_MS.to_string())
        .child(
            Element::new("div")
                .class("d-flex")
                .child(Element::new("div").class("toast-body").text(message))
                .child(
                    Element::new("button")
                        .attr("type", "button")
                        .class("btn-close me-2 m-auto")
                        .attr("data-bs-dismiss", "toast")
                        .attr("aria-label", "Close"),
                ),
        )
}

#[derive(Debug, Default)]
struct Recorded {
    toasts: Vec<String>,
    alerts: Vec<String>,
}

/// Notifier that records messages for an HTML page's toast container.
#[derive(Debug, Default)]
pub struct HtmlNotifier {
    recorded: Mutex<Recorded>,
}

impl HtmlNotifier {
    fn with_recorded<T>(&self, f: impl FnOnce(&mut Recorded) -> T) -> T {
        let mut guard = self.recorded.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }

    pub fn toasts(&self) -> Vec<String> {
        self.with_recorded(|r| r.toasts.clone())
    }

    pub fn alerts(&self) -> Vec<String> {
        self.with_recorded(|r| r.alerts.clone())
    }

    /// Toast markup, one element per recorded toast, ids `toast-1`, `toast-2`, ...
    pub fn toast_elements(&self) -> Vec<Element> {
        self.with_recorded(|r| {
            r.toasts
                .iter()
                .enumerate()
                .map(|(i, msg)| toast_element(&format!("toast-{}", i + 1), msg))
                .collect()
        })
    }
}

impl Notifier for HtmlNotifier {
    fn toast(&self, message: &str) {
        tracing::info!(message, "Toast");
        self.with_recorded(|r| r.toasts.push(message.to_string()));
    }

    fn alert(&self, message: &str) {
        tracing::warn!(message, "Alert");
        self.with_recorded(|r| r.alerts.push(message.to_string()));
    }
}
