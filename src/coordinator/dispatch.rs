//! Notification event dispatch.
//!
//! Routes events delivered by the notification backend into the alarm
//! coordinator: snooze and dismiss actions, plain opens (trigger), and
//! everything else. Unknown action identifiers are logged and ignored;
//! nothing here is fatal.

use chrono::{DateTime, Utc};

use crate::notification::{action_ids, NotificationError, NotificationEvent, NotificationSender};
use crate::types::AlarmPhase;

use super::AlarmCoordinator;

/// Outcome of dispatching a single notification event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The alarm was snoozed until the given instant.
    Snoozed(DateTime<Utc>),
    /// The alarm was dismissed and cleared.
    Dismissed,
    /// The alarm was marked triggered.
    Triggered,
    /// The event was ignored (idle alarm, unknown action, or silent delivery).
    Ignored,
}

/// Routes a backend event to the coordinator's snooze, dismiss or trigger
/// handling, based on the event's action identifier and the alarm phase.
///
/// Events arriving while no alarm is set are dropped. Snooze and dismiss
/// apply in any armed or triggered phase; a snoozed alarm that fires again
/// follows the same rules as a scheduled one.
///
/// # Errors
///
/// Returns the backend error when a snooze's reschedule fails; alarm state is
/// left unchanged in that case.
pub fn dispatch_event<S: NotificationSender>(
    coordinator: &mut AlarmCoordinator<S>,
    event: &NotificationEvent,
) -> Result<Dispatch, NotificationError> {
    if coordinator.alarm().phase == AlarmPhase::Idle {
        tracing::debug!(?event, "dropping event, no alarm set");
        return Ok(Dispatch::Ignored);
    }

    match event.action_id.as_deref() {
        Some(action_ids::SNOOZE) => {
            let until = coordinator.snooze()?;
            Ok(Dispatch::Snoozed(until))
        }
        Some(action_ids::DISMISS) => {
            coordinator.reset();
            Ok(Dispatch::Dismissed)
        }
        Some(other) => {
            tracing::warn!(action = other, "ignoring unknown notification action");
            Ok(Dispatch::Ignored)
        }
        None if event.user_interacted => {
            coordinator.on_trigger_event();
            Ok(Dispatch::Triggered)
        }
        None => {
            // Delivered but never opened; the alarm stays armed as-is.
            tracing::debug!("notification delivered without interaction");
            Ok(Dispatch::Ignored)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
