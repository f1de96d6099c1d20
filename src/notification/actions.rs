//! Notification action and channel definitions.
//!
//! This module defines the action buttons attached to alarm notifications and
//! the notification channel the alarm posts to.

use serde::{Deserialize, Serialize};

use crate::types::AlarmConfig;

/// Notification action identifiers.
pub mod action_ids {
    /// Action ID for snoozing the alarm.
    pub const SNOOZE: &str = "SNOOZE_ACTION";
    /// Action ID for dismissing the alarm.
    pub const DISMISS: &str = "DISMISS_ACTION";
}

/// Notification channel identifiers.
pub mod channel_ids {
    /// Channel for alarm notifications.
    pub const ALARM: &str = "alarm_channel";
}

/// Returns the action ids attached to every alarm notification.
#[must_use]
pub fn alarm_actions() -> Vec<String> {
    vec![
        action_ids::SNOOZE.to_string(),
        action_ids::DISMISS.to_string(),
    ]
}

// ============================================================================
// ChannelSpec
// ============================================================================

/// Describes a notification channel to the backend.
///
/// Channel creation is idempotent; backends may be handed the same spec on
/// every startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSpec {
    /// Channel identifier
    pub id: String,
    /// Human-readable channel name
    pub name: String,
    /// Sound asset played for notifications on this channel
    pub sound: String,
    /// Channel importance (platform scale, 4 = high)
    pub importance: u8,
}

impl ChannelSpec {
    /// Builds the alarm channel spec from the alarm configuration.
    #[must_use]
    pub fn alarm_channel(config: &AlarmConfig) -> Self {
        Self {
            id: channel_ids::ALARM.to_string(),
            name: "Alarm Channel".to_string(),
            sound: config.sound.clone(),
            importance: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_ids() {
        assert_eq!(action_ids::SNOOZE, "SNOOZE_ACTION");
        assert_eq!(action_ids::DISMISS, "DISMISS_ACTION");
    }

    #[test]
    fn test_alarm_actions() {
        let actions = alarm_actions();
        assert_eq!(actions, vec!["SNOOZE_ACTION", "DISMISS_ACTION"]);
    }

    #[test]
    fn test_alarm_channel_spec() {
        let spec = ChannelSpec::alarm_channel(&AlarmConfig::default());
        assert_eq!(spec.id, "alarm_channel");
        assert_eq!(spec.name, "Alarm Channel");
        assert_eq!(spec.sound, "alarm_sound.wav");
        assert_eq!(spec.importance, 4);
    }
}
