//! Confirmation-gated video deletion.
//!
//! A [`DeletionWorkflow`] moves through `Idle → Armed → Confirmed → Idle`.
//! Arming stages a [`DeletionTarget`]; confirming dispatches the
//! source-specific delete and always returns to `Idle`, whatever the outcome,
//! so a stale identifier can never be reused for the other source.

use std::future::Future;

use homewatch_core::{SourceKind, VideoRecord};

use crate::api::VideoBackend;
use crate::notify::Notifier;

/// What a Delete button deletes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionTarget {
    pub identifier: String,
    pub source: SourceKind,
}

impl DeletionTarget {
    /// Target for a record, or `None` when the record lacks its deletion key.
    pub fn for_video(video: &VideoRecord) -> Option<Self> {
        video.is_deletable().then(|| Self {
            identifier: video.identifier.clone(),
            source: video.source,
        })
    }
}

/// Where the workflow currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeletionState {
    #[default]
    Idle,
    Armed(DeletionTarget),
    /// The delete request is in flight.
    Confirmed(DeletionTarget),
}

/// Result of [`DeletionWorkflow::confirm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// The backend deleted the video; `message` is its confirmation text.
    Deleted {
        target: DeletionTarget,
        message: String,
    },
    /// The request failed; `message` is what the user was shown.
    Failed {
        target: DeletionTarget,
        message: String,
    },
    /// `confirm` was called with nothing armed.
    NotArmed,
}

/// A per-invocation confirmation prompt.
///
/// Each deletion opens its own dialog and awaits the answer, so cards never
/// share a confirm button.
pub trait ConfirmDialog {
    /// Ask the user whether `target` should be deleted.
    fn confirm(&self, target: &DeletionTarget) -> impl Future<Output = bool> + Send;
}

/// Single-slot deletion state machine.
#[derive(Debug, Default)]
pub struct DeletionWorkflow {
    state: DeletionState,
}

impl DeletionWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeletionState {
        &self.state
    }

    /// The staged target, if armed.
    pub fn armed(&self) -> Option<&DeletionTarget> {
        match &self.state {
            DeletionState::Armed(target) => Some(target),
            _ => None,
        }
    }

    /// Stage deletion of `video`.
    ///
    /// Returns `None` (and leaves the state untouched) for malformed records.
    pub fn arm(&mut self, video: &VideoRecord) -> Option<&DeletionTarget> {
        let Some(target) = DeletionTarget::for_video(video) else {
            tracing::warn!(source = %video.source, "Refusing to arm deletion of malformed record");
            return None;
        };
        self.arm_target(target);
        self.armed()
    }

    /// Stage an explicit target, overwriting any previously armed one.
    pub fn arm_target(&mut self, target: DeletionTarget) {
        if let DeletionState::Armed(previous) = &self.state {
            tracing::debug!(
                previous = %previous.identifier,
                next = %target.identifier,
                "Replacing armed deletion"
            );
        }
        self.state = DeletionState::Armed(target);
    }

    /// Drop the armed target without sending anything.
    pub fn cancel(&mut self) -> Option<DeletionTarget> {
        match std::mem::take(&mut self.state) {
            DeletionState::Armed(target) | DeletionState::Confirmed(target) => Some(target),
            DeletionState::Idle => None,
        }
    }

    /// Dispatch the armed deletion.
    ///
    /// On success the backend's message is shown as a toast; on failure a
    /// blocking alert is raised. Either way the workflow ends `Idle`.
    pub async fn confirm<B, N>(&mut self, backend: &B, notifier: &N) -> DeletionOutcome
    where
        B: VideoBackend,
        N: Notifier,
    {
        let target = match std::mem::take(&mut self.state) {
            DeletionState::Armed(target) => target,
            _ => return DeletionOutcome::NotArmed,
        };

        self.state = DeletionState::Confirmed(target.clone());
        let result = backend
            .delete_video(target.source, &target.identifier)
            .await;
        self.state = DeletionState::Idle;

        match result {
            Ok(message) => {
                notifier.toast(&message);
                DeletionOutcome::Deleted { target, message }
            }
            Err(e) => {
                tracing::error!(
                    source = %target.source,
                    identifier = %target.identifier,
                    error = %e,
                    "Video deletion failed"
                );
                let message = match e.backend_message() {
                    Some(reason) => format!(
                        "Error! Can not delete {} video: {reason}",
                        target.source.label()
                    ),
                    None => format!("Error! Can not delete {} video.", target.source.label()),
                };
                notifier.alert(&message);
                DeletionOutcome::Failed { target, message }
            }
        }
    }
}
