//! Gallery orchestration.
//!
//! [`GalleryController`] wires the date catalog, both video sources, the card
//! renderer and the deletion workflow to a [`GalleryView`]. Every refresh
//! clears the view and rebuilds it from a fresh fetch.

use homewatch_core::VideoRecord;

use crate::api::VideoBackend;
use crate::cards::{render_card, render_placeholder};
use crate::catalog::DateCatalog;
use crate::deletion::{ConfirmDialog, DeletionOutcome, DeletionTarget, DeletionWorkflow};
use crate::error::GalleryError;
use crate::notify::Notifier;
use crate::source::fetch_gallery;
use crate::view::{GalleryView, MountedNode};

pub struct GalleryController<B, V, N> {
    backend: B,
    view: V,
    notifier: N,
    catalog: DateCatalog,
    selected_date: String,
    workflow: DeletionWorkflow,
    refreshes: usize,
}

impl<B, V, N> GalleryController<B, V, N>
where
    B: VideoBackend,
    V: GalleryView,
    N: Notifier,
{
    pub fn new(backend: B, view: V, notifier: N) -> Self {
        Self {
            backend,
            view,
            notifier,
            catalog: DateCatalog::default(),
            selected_date: String::new(),
            workflow: DeletionWorkflow::new(),
            refreshes: 0,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn catalog(&self) -> &DateCatalog {
        &self.catalog
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    pub fn workflow(&self) -> &DeletionWorkflow {
        &self.workflow
    }

    /// Number of completed refreshes.
    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }

    /// Initial load: fill the date selector, select the newest date and
    /// render it. A failed date fetch stops here without rendering.
    pub async fn load(&mut self) -> Result<usize, GalleryError> {
        self.load_dates().await?;
        self.refresh(None).await
    }

    /// Fill the date selector and select the newest date without rendering.
    pub async fn load_dates(&mut self) -> Result<(), GalleryError> {
        self.catalog = DateCatalog::load(&self.backend).await?;
        self.selected_date = self.catalog.default_date();
        self.view.set_dates(self.catalog.dates(), &self.selected_date);

        tracing::info!(
            dates = self.catalog.dates().len(),
            selected = %self.selected_date,
            "Loaded available dates"
        );
        Ok(())
    }

    /// The user picked another date.
    pub async fn select_date(&mut self, date: &str) -> Result<usize, GalleryError> {
        self.refresh(Some(date)).await
    }

    /// Fetch, clear and re-render the gallery. Returns the number of cards
    /// mounted.
    ///
    /// `Some(date)` first makes `date` the current selection, so later
    /// refreshes (such as the one after a deletion) stay on it. `None`
    /// re-renders the current selection. On a fetch failure the view's cards
    /// are left as they were.
    pub async fn refresh(&mut self, date: Option<&str>) -> Result<usize, GalleryError> {
        if let Some(date) = date {
            self.selected_date = date.to_string();
            self.view.set_dates(self.catalog.dates(), &self.selected_date);
        }
        let date = self.selected_date.clone();
        let videos = fetch_gallery(&self.backend, &date).await?;

        self.view.clear();
        let mounted = self.mount_videos(&videos);
        self.refreshes += 1;

        tracing::info!(date = %date, cards = mounted, "Gallery refreshed");
        Ok(mounted)
    }

    fn mount_videos(&mut self, videos: &[VideoRecord]) -> usize {
        if videos.is_empty() {
            self.view.mount(MountedNode::Placeholder(render_placeholder()));
            return 0;
        }
        for video in videos {
            self.view.mount(MountedNode::Card(render_card(video)));
        }
        videos.len()
    }

    /// A card's Delete button was pressed: stage its target and open the
    /// confirmation prompt.
    pub fn arm_delete(&mut self, target: DeletionTarget) {
        self.view.show_confirmation(&target);
        self.workflow.arm_target(target);
    }

    /// Arm deletion of `video`. Malformed records are refused.
    pub fn arm_video(&mut self, video: &VideoRecord) -> Option<DeletionTarget> {
        let target = self.workflow.arm(video)?.clone();
        self.view.show_confirmation(&target);
        Some(target)
    }

    /// The prompt was dismissed.
    pub fn cancel_delete(&mut self) -> Option<DeletionTarget> {
        self.view.hide_confirmation();
        self.workflow.cancel()
    }

    /// The prompt was accepted: send the delete, then refresh on success.
    ///
    /// A refresh failure after a successful delete is logged; the outcome
    /// still reports the deletion.
    pub async fn confirm_delete(&mut self) -> DeletionOutcome {
        self.view.hide_confirmation();
        let outcome = self.workflow.confirm(&self.backend, &self.notifier).await;

        if let DeletionOutcome::Deleted { target, .. } = &outcome {
            if let Err(e) = self.refresh(None).await {
                tracing::error!(
                    identifier = %target.identifier,
                    error = %e,
                    "Refresh after deletion failed"
                );
            }
        }
        outcome
    }

    /// Arm `target`, ask `dialog`, then confirm or cancel.
    ///
    /// Returns `None` when the user declined.
    pub async fn delete_with_confirmation<D: ConfirmDialog>(
        &mut self,
        target: DeletionTarget,
        dialog: &D,
    ) -> Option<DeletionOutcome> {
        self.arm_delete(target.clone());
        if dialog.confirm(&target).await {
            Some(self.confirm_delete().await)
        } else {
            tracing::debug!(identifier = %target.identifier, "Deletion declined");
            self.cancel_delete();
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
