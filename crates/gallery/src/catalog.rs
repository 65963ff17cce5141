//! Dates for which videos exist.

use homewatch_core::dates::{select_default_date, sort_descending};

use crate::api::{GalleryApiError, VideoBackend};

/// Fetch the available dates. Failures are logged and returned.
pub async fn load_available_dates<B: VideoBackend>(
    backend: &B,
) -> Result<Vec<String>, GalleryApiError> {
    backend.available_dates().await.inspect_err(|e| {
        tracing::error!(error = %e, "Error! Can not fetch dates");
    })
}

/// The date list, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateCatalog {
    dates: Vec<String>,
}

impl DateCatalog {
    pub fn from_dates(mut dates: Vec<String>) -> Self {
        sort_descending(&mut dates);
        Self { dates }
    }

    pub async fn load<B: VideoBackend>(backend: &B) -> Result<Self, GalleryApiError> {
        let dates = load_available_dates(backend).await?;
        Ok(Self::from_dates(dates))
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Most recent date, or an empty string when there are none.
    pub fn default_date(&self) -> String {
        select_default_date(&self.dates)
    }
}
