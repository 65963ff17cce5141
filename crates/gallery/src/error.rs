use homewatch_core::CoreError;

use crate::api::GalleryApiError;

/// Errors surfaced by the gallery controller.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error(transparent)]
    Api(#[from] GalleryApiError),

    #[error(transparent)]
    Core(#[from] CoreError),
}
