//! Notification system error types.
//!
//! Every error here is non-fatal: a failure degrades to "alarm not
//! (re)scheduled", never a crash.

use thiserror::Error;

/// Errors that can occur in the notification system.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Notification permission was denied by the user.
    #[error("notification permission denied")]
    PermissionDenied,

    /// The backend rejected a schedule request.
    #[error("failed to schedule notification: {0}")]
    SendFailed(String),

    /// Failed to create the notification channel.
    #[error("failed to create notification channel: {0}")]
    ChannelCreationFailed(String),

    /// The notification backend is not available.
    #[error("notification backend is not available")]
    NotAvailable,
}

impl NotificationError {
    /// Returns true if this error is related to permissions.
    #[must_use]
    pub fn is_permission_error(&self) -> bool {
        matches!(self, Self::PermissionDenied)
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "allow notifications for this app in system settings",
            Self::SendFailed(_) => "check the notification backend and try setting the alarm again",
            Self::ChannelCreationFailed(_) => "restart the application",
            Self::NotAvailable => "run with a notification backend configured",
        }
    }
}
