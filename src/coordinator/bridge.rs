//! UI state bridge.
//!
//! Callback registrations that let the coordinator notify a presentation
//! layer of trigger and snooze state changes. Each slot holds at most one
//! callback; registering again replaces the previous one. This is intentional:
//! only one UI surface observes the coordinator at a time.

use chrono::{DateTime, Utc};

/// Callback invoked when the alarm triggers.
pub type TriggerCallback = Box<dyn FnMut() + Send>;

/// Callback invoked with the new snooze fire instant.
pub type SnoozeTimeCallback = Box<dyn FnMut(DateTime<Utc>) + Send>;

/// Single-slot callback registry for the presentation layer.
#[derive(Default)]
pub struct UiBridge {
    on_trigger: Option<TriggerCallback>,
    on_snooze_time_changed: Option<SnoozeTimeCallback>,
}

impl UiBridge {
    /// Creates a bridge with no callbacks registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the trigger callback. Last registration wins.
    pub fn on_trigger(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_trigger = Some(Box::new(callback));
    }

    /// Registers the snooze-time callback. Last registration wins.
    pub fn on_snooze_time_changed(
        &mut self,
        callback: impl FnMut(DateTime<Utc>) + Send + 'static,
    ) {
        self.on_snooze_time_changed = Some(Box::new(callback));
    }

    /// Removes all registered callbacks.
    pub fn clear(&mut self) {
        self.on_trigger = None;
        self.on_snooze_time_changed = None;
    }

    /// Invokes the trigger callback if one is registered.
    pub fn notify_trigger(&mut self) {
        if let Some(callback) = self.on_trigger.as_mut() {
            callback();
        }
    }

    /// Invokes the snooze-time callback if one is registered.
    pub fn notify_snooze_time_changed(&mut self, until: DateTime<Utc>) {
        if let Some(callback) = self.on_snooze_time_changed.as_mut() {
            callback(until);
        }
    }

    /// Returns true if a trigger callback is registered.
    #[must_use]
    pub fn has_trigger_listener(&self) -> bool {
        self.on_trigger.is_some()
    }
}

impl std::fmt::Debug for UiBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiBridge")
            .field("on_trigger", &self.on_trigger.is_some())
            .field(
                "on_snooze_time_changed",
                &self.on_snooze_time_changed.is_some(),
            )
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
