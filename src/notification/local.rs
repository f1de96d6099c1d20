//! Local in-process notification delivery.
//!
//! [`LocalNotificationSender`] stands in for a platform notification service
//! when the alarm runs as a plain foreground process: scheduling spawns a
//! tokio timer task that emits a delivery event at the fire instant. At most
//! one timer task exists at a time; rescheduling aborts the previous one.

use std::sync::Mutex;

use chrono::Utc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use super::{ChannelSpec, NotificationError, NotificationEvent, NotificationRequest,
            NotificationSender};

/// Notification sender backed by tokio timers.
///
/// Must be used from within a tokio runtime; `schedule` reports
/// [`NotificationError::NotAvailable`] otherwise.
pub struct LocalNotificationSender {
    event_tx: UnboundedSender<NotificationEvent>,
    event_rx: Mutex<UnboundedReceiver<NotificationEvent>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl LocalNotificationSender {
    /// Creates a new local sender with an empty delivery queue.
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx: Mutex::new(event_rx),
            pending: Mutex::new(None),
        }
    }

    fn abort_pending(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}

impl Default for LocalNotificationSender {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSender for LocalNotificationSender {
    fn create_channel(&self, spec: &ChannelSpec) -> Result<(), NotificationError> {
        // Channels are a platform concept; locally there is nothing to set up.
        tracing::debug!(channel = %spec.id, "local channel ready");
        Ok(())
    }

    fn schedule(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|_| NotificationError::NotAvailable)?;

        self.abort_pending();

        let delay = (request.fire_at - Utc::now())
            .to_std()
            .unwrap_or(Duration::ZERO);
        let tx = self.event_tx.clone();
        let id = request.id.clone();

        let task = handle.spawn(async move {
            sleep(delay).await;
            tracing::debug!(request = %id, "local notification fired");
            // An in-process fire presents the alarm to the user directly, so
            // it counts as the notification being opened.
            let _ = tx.send(NotificationEvent::opened());
        });

        if let Ok(mut pending) = self.pending.lock() {
            *pending = Some(task);
        }
        Ok(())
    }

    fn cancel_all(&self) {
        self.abort_pending();
    }

    fn try_recv_event(&self) -> Option<NotificationEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|mut rx| rx.try_recv().ok())
    }

    fn is_available(&self) -> bool {
        tokio::runtime::Handle::try_current().is_ok()
    }
}

// ============================================================================
// Tests
// ============================================================================
