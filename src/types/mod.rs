//! Core data types for the alarm clock.
//!
//! This module defines the data structures used for:
//! - Alarm state management (single-alarm model)
//! - Alarm configuration with validation

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

// ============================================================================
// AlarmPhase
// ============================================================================

/// Represents the current phase of the alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmPhase {
    /// No alarm is set
    Idle,
    /// An alarm is scheduled and waiting to fire
    Scheduled,
    /// The alarm fired and the user has seen it
    Triggered,
    /// The alarm was snoozed and will fire again
    Snoozed,
}

impl AlarmPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlarmPhase::Idle => "idle",
            AlarmPhase::Scheduled => "scheduled",
            AlarmPhase::Triggered => "triggered",
            AlarmPhase::Snoozed => "snoozed",
        }
    }

    /// Returns true if a notification is (or should be) pending.
    pub fn is_armed(&self) -> bool {
        matches!(self, AlarmPhase::Scheduled | AlarmPhase::Snoozed)
    }
}

impl Default for AlarmPhase {
    fn default() -> Self {
        AlarmPhase::Idle
    }
}

// ============================================================================
// AlarmConfig
// ============================================================================

/// Configuration for the alarm clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmConfig {
    /// Time zone the user's wall-clock time is interpreted in
    pub time_zone: Tz,
    /// Snooze delay in minutes (1-60)
    pub snooze_minutes: u32,
    /// Notification title
    pub title: String,
    /// Notification body text
    pub body: String,
    /// Notification sound asset name
    pub sound: String,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            time_zone: chrono_tz::Asia::Colombo,
            snooze_minutes: 1,
            title: "Alarm".to_string(),
            body: "Wake up!".to_string(),
            sound: "alarm_sound.wav".to_string(),
        }
    }
}

impl AlarmConfig {
    /// Creates a new configuration with the specified time zone.
    pub fn with_time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// Creates a new configuration with the specified snooze delay.
    pub fn with_snooze_minutes(mut self, minutes: u32) -> Self {
        self.snooze_minutes = minutes;
        self
    }

    /// Returns the snooze delay as a duration.
    pub fn snooze_delay(&self) -> Duration {
        Duration::minutes(i64::from(self.snooze_minutes))
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.snooze_minutes < 1 || self.snooze_minutes > 60 {
            return Err("snooze delay must be between 1 and 60 minutes".to_string());
        }
        if self.title.is_empty() {
            return Err("notification title must not be empty".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Alarm
// ============================================================================

/// The single user-configured alarm tracked by the system.
///
/// Exactly one alarm is live at a time; scheduling a new target replaces the
/// prior one. The transition methods here are pure state mutations; submitting
/// and cancelling the matching notification is the coordinator's job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Alarm {
    /// Current phase of the alarm
    pub phase: AlarmPhase,
    /// Absolute instant the alarm is set to fire
    pub target: Option<DateTime<Utc>>,
    /// Whether the alarm's notification has reached the user
    pub triggered: bool,
    /// Instant a pending snooze will fire, if the alarm was snoozed
    pub snooze_until: Option<DateTime<Utc>>,
}

impl Alarm {
    /// Creates a new empty alarm.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new target instant, replacing any prior schedule.
    ///
    /// Clears the triggered flag and any pending snooze.
    pub fn schedule(&mut self, target: DateTime<Utc>) {
        self.phase = AlarmPhase::Scheduled;
        self.target = Some(target);
        self.triggered = false;
        self.snooze_until = None;
    }

    /// Records a snooze until the given instant.
    ///
    /// The snooze instant becomes the new target; the triggered flag resets so
    /// the next fire counts as a fresh trigger.
    pub fn snooze(&mut self, until: DateTime<Utc>) {
        self.phase = AlarmPhase::Snoozed;
        self.target = Some(until);
        self.triggered = false;
        self.snooze_until = Some(until);
    }

    /// Marks the alarm as triggered.
    ///
    /// Returns true only on the first call per scheduled fire, so repeated
    /// event delivery does not re-fire callbacks.
    pub fn trigger(&mut self) -> bool {
        if self.triggered {
            return false;
        }
        self.phase = AlarmPhase::Triggered;
        self.triggered = true;
        true
    }

    /// Resets the alarm to the empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true if no alarm is set.
    pub fn is_empty(&self) -> bool {
        self.phase == AlarmPhase::Idle && self.target.is_none()
    }

    /// Returns the target instant as milliseconds since the Unix epoch.
    pub fn target_epoch_millis(&self) -> Option<i64> {
        self.target.map(|t| t.timestamp_millis())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    // ------------------------------------------------------------------------
    // AlarmPhase Tests
    // ------------------------------------------------------------------------

    mod alarm_phase_tests {
        use super::*;

        #[test]
        fn test_default_is_idle() {
            assert_eq!(AlarmPhase::default(), AlarmPhase::Idle);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(AlarmPhase::Idle.as_str(), "idle");
            assert_eq!(AlarmPhase::Scheduled.as_str(), "scheduled");
            assert_eq!(AlarmPhase::Triggered.as_str(), "triggered");
            assert_eq!(AlarmPhase::Snoozed.as_str(), "snoozed");
        }

        #[test]
        fn test_is_armed() {
            assert!(!AlarmPhase::Idle.is_armed());
            assert!(AlarmPhase::Scheduled.is_armed());
            assert!(!AlarmPhase::Triggered.is_armed());
            assert!(AlarmPhase::Snoozed.is_armed());
        }

        #[test]
        fn test_serialize_deserialize() {
            let phase = AlarmPhase::Snoozed;
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(json, "\"snoozed\"");

            let deserialized: AlarmPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, AlarmPhase::Snoozed);
        }
    }

    // ------------------------------------------------------------------------
    // AlarmConfig Tests
    // ------------------------------------------------------------------------

    mod alarm_config_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let config = AlarmConfig::default();
            assert_eq!(config.time_zone, chrono_tz::Asia::Colombo);
            assert_eq!(config.snooze_minutes, 1);
            assert_eq!(config.title, "Alarm");
            assert_eq!(config.body, "Wake up!");
            assert_eq!(config.sound, "alarm_sound.wav");
        }

        #[test]
        fn test_builder_pattern() {
            let config = AlarmConfig::default()
                .with_time_zone(chrono_tz::Europe::Berlin)
                .with_snooze_minutes(5);

            assert_eq!(config.time_zone, chrono_tz::Europe::Berlin);
            assert_eq!(config.snooze_minutes, 5);
        }

        #[test]
        fn test_snooze_delay() {
            let config = AlarmConfig::default().with_snooze_minutes(3);
            assert_eq!(config.snooze_delay(), Duration::minutes(3));
        }

        #[test]
        fn test_validate_success() {
            assert!(AlarmConfig::default().validate().is_ok());
        }

        #[test]
        fn test_validate_boundary_values() {
            let config = AlarmConfig::default().with_snooze_minutes(1);
            assert!(config.validate().is_ok());

            let config = AlarmConfig::default().with_snooze_minutes(60);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_validate_snooze_too_low() {
            let config = AlarmConfig::default().with_snooze_minutes(0);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_snooze_too_high() {
            let config = AlarmConfig::default().with_snooze_minutes(61);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_empty_title() {
            let config = AlarmConfig {
                title: String::new(),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_serialize_deserialize() {
            let config = AlarmConfig::default()
                .with_time_zone(chrono_tz::America::New_York)
                .with_snooze_minutes(10);

            let json = serde_json::to_string(&config).unwrap();
            let deserialized: AlarmConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(config, deserialized);
        }
    }

    // ------------------------------------------------------------------------
    // Alarm Tests
    // ------------------------------------------------------------------------

    mod alarm_tests {
        use super::*;

        #[test]
        fn test_new_alarm_is_empty() {
            let alarm = Alarm::new();
            assert!(alarm.is_empty());
            assert_eq!(alarm.phase, AlarmPhase::Idle);
            assert_eq!(alarm.target, None);
            assert!(!alarm.triggered);
            assert_eq!(alarm.snooze_until, None);
        }

        #[test]
        fn test_schedule() {
            let mut alarm = Alarm::new();
            let t = instant(1_700_000_000);

            alarm.schedule(t);

            assert_eq!(alarm.phase, AlarmPhase::Scheduled);
            assert_eq!(alarm.target, Some(t));
            assert!(!alarm.triggered);
            assert_eq!(alarm.snooze_until, None);
        }

        #[test]
        fn test_schedule_replaces_prior_target() {
            let mut alarm = Alarm::new();
            alarm.schedule(instant(100));
            alarm.schedule(instant(200));

            assert_eq!(alarm.target, Some(instant(200)));
        }

        #[test]
        fn test_schedule_clears_triggered_and_snooze() {
            let mut alarm = Alarm::new();
            alarm.schedule(instant(100));
            alarm.trigger();
            alarm.snooze(instant(160));

            alarm.schedule(instant(300));

            assert!(!alarm.triggered);
            assert_eq!(alarm.snooze_until, None);
            assert_eq!(alarm.phase, AlarmPhase::Scheduled);
        }

        #[test]
        fn test_snooze() {
            let mut alarm = Alarm::new();
            alarm.schedule(instant(100));
            alarm.trigger();

            alarm.snooze(instant(160));

            assert_eq!(alarm.phase, AlarmPhase::Snoozed);
            assert_eq!(alarm.target, Some(instant(160)));
            assert_eq!(alarm.snooze_until, Some(instant(160)));
            assert!(!alarm.triggered);
        }

        #[test]
        fn test_snooze_twice_keeps_only_second() {
            let mut alarm = Alarm::new();
            alarm.schedule(instant(100));

            alarm.snooze(instant(160));
            alarm.snooze(instant(220));

            assert_eq!(alarm.snooze_until, Some(instant(220)));
            assert_eq!(alarm.target, Some(instant(220)));
        }

        #[test]
        fn test_trigger_fires_once() {
            let mut alarm = Alarm::new();
            alarm.schedule(instant(100));

            assert!(alarm.trigger());
            assert!(alarm.triggered);
            assert_eq!(alarm.phase, AlarmPhase::Triggered);

            // Repeated delivery must not re-fire
            assert!(!alarm.trigger());
            assert!(alarm.triggered);
        }

        #[test]
        fn test_trigger_after_snooze_fires_again() {
            let mut alarm = Alarm::new();
            alarm.schedule(instant(100));
            alarm.trigger();
            alarm.snooze(instant(160));

            // Snooze reset the guard, so the next fire triggers again
            assert!(alarm.trigger());
        }

        #[test]
        fn test_reset() {
            let mut alarm = Alarm::new();
            alarm.schedule(instant(100));
            alarm.trigger();
            alarm.snooze(instant(160));

            alarm.reset();

            assert!(alarm.is_empty());
            assert!(!alarm.triggered);
            assert_eq!(alarm.snooze_until, None);
        }

        #[test]
        fn test_reset_is_idempotent() {
            let mut alarm = Alarm::new();
            alarm.reset();
            alarm.reset();
            assert!(alarm.is_empty());
        }

        #[test]
        fn test_target_epoch_millis() {
            let mut alarm = Alarm::new();
            assert_eq!(alarm.target_epoch_millis(), None);

            alarm.schedule(instant(1_700_000_000));
            assert_eq!(alarm.target_epoch_millis(), Some(1_700_000_000_000));
        }

        #[test]
        fn test_serialize_deserialize() {
            let mut alarm = Alarm::new();
            alarm.schedule(instant(1_700_000_000));

            let json = serde_json::to_string(&alarm).unwrap();
            let deserialized: Alarm = serde_json::from_str(&json).unwrap();

            assert_eq!(deserialized.phase, AlarmPhase::Scheduled);
            assert_eq!(deserialized.target, Some(instant(1_700_000_000)));
        }
    }
}
