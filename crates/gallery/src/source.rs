//! Per-source video providers and the joined gallery fetch.

use homewatch_core::dates::{resolve_fetch_date, today};
use homewatch_core::video::merge_sources;
use homewatch_core::{SourceKind, VideoRecord};

use crate::api::{GalleryApiError, VideoBackend};

/// One of the two symmetric video providers.
#[derive(Debug, Clone, Copy)]
pub struct VideoSource<'a, B> {
    kind: SourceKind,
    backend: &'a B,
}

impl<'a, B: VideoBackend> VideoSource<'a, B> {
    pub fn new(kind: SourceKind, backend: &'a B) -> Self {
        Self { kind, backend }
    }

    pub fn local(backend: &'a B) -> Self {
        Self::new(SourceKind::Local, backend)
    }

    pub fn google_drive(backend: &'a B) -> Self {
        Self::new(SourceKind::GoogleDrive, backend)
    }

    /// Records of this source for `date` (empty means today).
    ///
    /// Every returned record is tagged with this source, whatever the
    /// payload claims.
    pub async fn fetch_videos_for_date(
        &self,
        date: &str,
    ) -> Result<Vec<VideoRecord>, GalleryApiError> {
        let date = resolve_fetch_date(date, &today());
        let wire = self.backend.videos_for_date(self.kind, &date).await?;

        Ok(wire
            .into_iter()
            .map(|record| {
                if let Some(declared) = record.declared_source() {
                    match declared.parse::<SourceKind>() {
                        Ok(kind) if kind == self.kind => {}
                        Ok(_) => tracing::warn!(
                            expected = %self.kind,
                            declared,
                            "Record source disagrees with its endpoint"
                        ),
                        Err(e) => tracing::warn!(expected = %self.kind, error = %e, "Ignoring record source"),
                    }
                }
                VideoRecord::from_wire(self.kind, record)
            })
            .collect())
    }
}

/// Fetch both sources concurrently and merge them (Drive first).
///
/// Either failure aborts the whole fetch; there is no partial result.
pub async fn fetch_gallery<B: VideoBackend>(
    backend: &B,
    date: &str,
) -> Result<Vec<VideoRecord>, GalleryApiError> {
    let drive = VideoSource::google_drive(backend);
    let local = VideoSource::local(backend);

    let (drive_videos, local_videos) = tokio::try_join!(
        drive.fetch_videos_for_date(date),
        local.fetch_videos_for_date(date)
    )
    .inspect_err(|e| tracing::error!(date, error = %e, "Error! Can not fetch videos"))?;

    tracing::debug!(
        date,
        drive = drive_videos.len(),
        local = local_videos.len(),
        "Fetched gallery"
    );
    Ok(merge_sources(local_videos, drive_videos))
}
