//! Notification request creation.
//!
//! A request is the mapping from the alarm to what is handed to the
//! notification backend. It is derived on every schedule and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::AlarmConfig;

use super::actions::{alarm_actions, channel_ids};

/// A scheduled-notification request for the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// Unique request identifier
    pub id: String,
    /// Notification title
    pub title: String,
    /// Notification body text
    pub body: String,
    /// Channel the notification posts to
    pub channel_id: String,
    /// Absolute instant the notification fires at
    pub fire_at: DateTime<Utc>,
    /// Action ids attached to the notification
    pub actions: Vec<String>,
}

impl NotificationRequest {
    /// Returns the fire instant as milliseconds since the Unix epoch.
    #[must_use]
    pub fn fire_at_epoch_millis(&self) -> i64 {
        self.fire_at.timestamp_millis()
    }
}

/// Builds an alarm notification request firing at the given instant.
///
/// Every request carries the snooze and dismiss actions and a fresh uuid
/// identifier.
#[must_use]
pub fn build_alarm_request(config: &AlarmConfig, fire_at: DateTime<Utc>) -> NotificationRequest {
    NotificationRequest {
        id: Uuid::new_v4().to_string(),
        title: config.title.clone(),
        body: config.body.clone(),
        channel_id: channel_ids::ALARM.to_string(),
        fire_at,
        actions: alarm_actions(),
    }
}
