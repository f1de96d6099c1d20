//! Alarm Clock Library
//!
//! This library provides the core functionality for the alarm clock CLI.
//! It includes:
//! - Wall-clock time normalization to the next occurrence in a fixed time zone
//! - Alarm coordination (schedule, reset, snooze, trigger handling)
//! - Notification event dispatch for snooze/dismiss actions
//! - A notification backend seam with a local tokio-based implementation
//! - Single-slot UI callbacks for trigger and snooze state changes
//! - CLI command parsing and display utilities

pub mod cli;
pub mod clock;
pub mod coordinator;
pub mod notification;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{Alarm, AlarmConfig, AlarmPhase};

pub use clock::{next_occurrence, WallTime};

pub use coordinator::{dispatch_event, AlarmCoordinator, Dispatch, UiBridge};

pub use notification::{
    action_ids, build_alarm_request, ChannelSpec, LocalNotificationSender,
    MockNotificationSender, NotificationError, NotificationEvent, NotificationRequest,
    NotificationSender,
};
