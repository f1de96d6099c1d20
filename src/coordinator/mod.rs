//! Alarm coordination.
//!
//! This module holds the alarm's scheduling logic:
//! - [`AlarmCoordinator`]: owns the single alarm, the notification backend and
//!   the UI bridge; exposes schedule, reset, snooze and trigger handling
//! - [`dispatch_event`]: routes backend notification events into the
//!   coordinator
//! - [`UiBridge`]: single-slot callbacks toward the presentation layer
//!
//! The coordinator is an explicitly constructed instance passed to whatever
//! composes the UI and event dispatch; there is no process-wide alarm state.

mod bridge;
mod dispatch;

pub use self::bridge::{SnoozeTimeCallback, TriggerCallback, UiBridge};
pub use self::dispatch::{dispatch_event, Dispatch};

use chrono::{DateTime, Utc};

use crate::clock::{next_occurrence, WallTime};
use crate::notification::{
    build_alarm_request, ChannelSpec, NotificationError, NotificationSender,
};
use crate::types::{Alarm, AlarmConfig};

// ============================================================================
// AlarmCoordinator
// ============================================================================

/// Coordinates the single alarm against a notification backend.
///
/// All operations are synchronous; the backend may deliver its events
/// asynchronously, but state mutation happens on one logical thread. `reset`
/// and `on_trigger_event` are idempotent and order-tolerant, so a trigger
/// racing a user reset cannot leave inconsistent state.
pub struct AlarmCoordinator<S: NotificationSender> {
    sender: S,
    config: AlarmConfig,
    alarm: Alarm,
    bridge: UiBridge,
}

impl<S: NotificationSender> AlarmCoordinator<S> {
    /// Creates a coordinator and sets up the notification channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects channel creation.
    pub fn new(config: AlarmConfig, sender: S) -> Result<Self, NotificationError> {
        let spec = ChannelSpec::alarm_channel(&config);
        sender.create_channel(&spec)?;

        Ok(Self {
            sender,
            config,
            alarm: Alarm::new(),
            bridge: UiBridge::new(),
        })
    }

    /// Schedules the alarm for the given instant, replacing any prior one.
    ///
    /// # Errors
    ///
    /// Returns the backend error if scheduling fails; alarm fields are left
    /// untouched in that case so the failure degrades to "alarm not
    /// (re)scheduled".
    pub fn schedule(&mut self, target: DateTime<Utc>) -> Result<(), NotificationError> {
        self.sender.cancel_all();

        let request = build_alarm_request(&self.config, target);
        self.sender.schedule(&request)?;

        self.alarm.schedule(target);
        tracing::info!(target = %target, "alarm scheduled");
        Ok(())
    }

    /// Normalizes a wall-clock time and schedules its next occurrence.
    ///
    /// Returns the scheduled instant.
    pub fn schedule_wall_time(&mut self, time: WallTime) -> Result<DateTime<Utc>, NotificationError> {
        self.schedule_wall_time_at(time, Utc::now())
    }

    /// Like [`Self::schedule_wall_time`], with an explicit current instant.
    pub fn schedule_wall_time_at(
        &mut self,
        time: WallTime,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, NotificationError> {
        let target = next_occurrence(time, now, self.config.time_zone);
        self.schedule(target)?;
        Ok(target)
    }

    /// Cancels all pending notifications and clears the alarm.
    pub fn reset(&mut self) {
        self.sender.cancel_all();
        self.alarm.reset();
        tracing::info!("alarm reset");
    }

    /// Snoozes the alarm by the configured delay from now.
    ///
    /// Returns the new fire instant.
    pub fn snooze(&mut self) -> Result<DateTime<Utc>, NotificationError> {
        self.snooze_at(Utc::now())
    }

    /// Like [`Self::snooze`], with an explicit current instant.
    ///
    /// Reschedules the notification (replacing, never accumulating), records
    /// the snooze instant and notifies the UI bridge.
    pub fn snooze_at(&mut self, now: DateTime<Utc>) -> Result<DateTime<Utc>, NotificationError> {
        let until = now + self.config.snooze_delay();

        self.sender.cancel_all();
        let request = build_alarm_request(&self.config, until);
        self.sender.schedule(&request)?;

        self.alarm.snooze(until);
        self.bridge.notify_snooze_time_changed(until);
        tracing::info!(until = %until, "alarm snoozed");
        Ok(until)
    }

    /// Handles the alarm's notification reaching the user.
    ///
    /// Idempotent: repeated delivery of the same fire marks the alarm
    /// triggered once and fires the UI callback once.
    pub fn on_trigger_event(&mut self) {
        if self.alarm.trigger() {
            tracing::info!("alarm triggered");
            self.bridge.notify_trigger();
        }
    }

    /// Returns the current alarm state.
    pub fn alarm(&self) -> &Alarm {
        &self.alarm
    }

    /// Returns the coordinator configuration.
    pub fn config(&self) -> &AlarmConfig {
        &self.config
    }

    /// Returns the UI bridge for callback registration.
    pub fn bridge_mut(&mut self) -> &mut UiBridge {
        &mut self.bridge
    }

    /// Returns the notification backend.
    pub fn sender(&self) -> &S {
        &self.sender
    }
}

// ============================================================================
// Tests
// ============================================================================
