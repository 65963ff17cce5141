//! Notification and motion detection preference changes.
//!
//! Both are single CSRF-protected form posts. The outcome is reported to the
//! user through the [`Notifier`] in the same words the settings page uses.

use homewatch_core::{MotionDetectionMode, NotificationPreference};

use crate::api::{GalleryApiError, PreferenceBackend};
use crate::notify::Notifier;

pub const NOTIFICATION_UPDATE_FAILED: &str = "Error! Can not update notification preference.";
pub const DETECTION_MODE_UPDATE_FAILED: &str = "Error! Can not update detection mode.";

/// Store `preference` and tell the user.
pub async fn change_notification_preference<B, N>(
    backend: &B,
    notifier: &N,
    preference: NotificationPreference,
) -> Result<(), GalleryApiError>
where
    B: PreferenceBackend,
    N: Notifier,
{
    match backend.update_notification_preference(preference).await {
        Ok(_) => {
            notifier.toast(&format!(
                "Email notification preference changed to {}",
                preference.display_name()
            ));
            Ok(())
        }
        Err(e) => {
            tracing::error!(%preference, error = %e, "Notification preference update failed");
            notifier.alert(NOTIFICATION_UPDATE_FAILED);
            Err(e)
        }
    }
}

/// Switch the detection algorithm and tell the user.
pub async fn change_motion_detection_mode<B, N>(
    backend: &B,
    notifier: &N,
    mode: MotionDetectionMode,
) -> Result<(), GalleryApiError>
where
    B: PreferenceBackend,
    N: Notifier,
{
    match backend.set_motion_detection_mode(mode).await {
        Ok(_) => {
            notifier.toast(&format!("Detection mode updated to {mode}"));
            Ok(())
        }
        Err(e) => {
            tracing::error!(%mode, error = %e, "Detection mode update failed");
            notifier.alert(DETECTION_MODE_UPDATE_FAILED);
            Err(e)
        }
    }
}
