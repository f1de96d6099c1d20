//! Notification service adapter.
//!
//! The alarm core never talks to a platform notification API directly; it
//! goes through the [`NotificationSender`] trait. This module provides:
//!
//! - The sender trait (channel creation, scheduling, cancellation, events)
//! - The event shape delivered back by a backend
//! - A mock sender for tests
//! - A local in-process sender backed by tokio timers (see [`local`])

mod actions;
pub mod error;
mod local;
mod request;

pub use self::actions::{action_ids, alarm_actions, channel_ids, ChannelSpec};
pub use self::error::NotificationError;
pub use self::local::LocalNotificationSender;
pub use self::request::{build_alarm_request, NotificationRequest};

// ============================================================================
// NotificationEvent
// ============================================================================

/// An event delivered by the notification backend.
///
/// `action_id` is set when the user pressed an action button; `user_interacted`
/// is true when the user opened or acted on the notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    /// Identifier of the pressed action, if any
    pub action_id: Option<String>,
    /// Whether the user interacted with the notification
    pub user_interacted: bool,
}

impl NotificationEvent {
    /// Event for the user opening the notification without pressing an action.
    #[must_use]
    pub fn opened() -> Self {
        Self {
            action_id: None,
            user_interacted: true,
        }
    }

    /// Event for the user pressing an action button.
    #[must_use]
    pub fn action(id: impl Into<String>) -> Self {
        Self {
            action_id: Some(id.into()),
            user_interacted: true,
        }
    }

    /// Event for a delivery the user has not interacted with.
    #[must_use]
    pub fn delivered() -> Self {
        Self {
            action_id: None,
            user_interacted: false,
        }
    }
}

// ============================================================================
// NotificationSender
// ============================================================================

/// Backend capable of scheduling alarm notifications and reporting events.
///
/// At most one notification is outstanding at a time; callers cancel before
/// rescheduling so requests replace rather than accumulate.
pub trait NotificationSender {
    /// Creates the notification channel. Idempotent.
    fn create_channel(&self, spec: &ChannelSpec) -> Result<(), NotificationError>;

    /// Schedules a notification to fire at `request.fire_at`.
    fn schedule(&self, request: &NotificationRequest) -> Result<(), NotificationError>;

    /// Cancels all pending notifications for this app.
    fn cancel_all(&self);

    /// Receives the next backend event without blocking.
    fn try_recv_event(&self) -> Option<NotificationEvent>;

    /// Returns true if the backend can currently deliver notifications.
    fn is_available(&self) -> bool;
}

// ============================================================================
// MockNotificationSender
// ============================================================================

/// Recording sender for tests.
#[derive(Debug, Default)]
pub struct MockNotificationSender {
    pending: std::sync::Mutex<Vec<NotificationRequest>>,
    channels: std::sync::Mutex<Vec<ChannelSpec>>,
    events: std::sync::Mutex<Vec<NotificationEvent>>,
    available: std::sync::atomic::AtomicBool,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockNotificationSender {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: std::sync::Mutex::new(Vec::new()),
            channels: std::sync::Mutex::new(Vec::new()),
            events: std::sync::Mutex::new(Vec::new()),
            available: std::sync::atomic::AtomicBool::new(true),
            should_fail: std::sync::atomic::AtomicBool::new(false),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available
            .store(available, std::sync::atomic::Ordering::SeqCst);
    }

    /// Makes subsequent `schedule` calls fail with a permission error.
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    /// Queues an event for the next `try_recv_event` call.
    pub fn inject_event(&self, event: NotificationEvent) {
        self.events.lock().unwrap().push(event);
    }

    /// Returns the currently pending (scheduled, not cancelled) requests.
    #[must_use]
    pub fn pending_requests(&self) -> Vec<NotificationRequest> {
        self.pending.lock().unwrap().clone()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Returns the channel specs handed to `create_channel`.
    #[must_use]
    pub fn created_channels(&self) -> Vec<ChannelSpec> {
        self.channels.lock().unwrap().clone()
    }
}

impl NotificationSender for MockNotificationSender {
    fn create_channel(&self, spec: &ChannelSpec) -> Result<(), NotificationError> {
        self.channels.lock().unwrap().push(spec.clone());
        Ok(())
    }

    fn schedule(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(NotificationError::PermissionDenied);
        }
        self.pending.lock().unwrap().push(request.clone());
        Ok(())
    }

    fn cancel_all(&self) {
        self.pending.lock().unwrap().clear();
    }

    fn try_recv_event(&self) -> Option<NotificationEvent> {
        let mut events = self.events.lock().unwrap();
        if events.is_empty() {
            None
        } else {
            Some(events.remove(0))
        }
    }

    fn is_available(&self) -> bool {
        self.available.load(std::sync::atomic::Ordering::SeqCst)
    }
}

// ============================================================================
// Tests
// ============================================================================
