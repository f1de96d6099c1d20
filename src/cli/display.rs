//! Display utilities for the alarm clock CLI.
//!
//! This module provides formatted output for:
//! - Alarm scheduling confirmations
//! - Trigger and snooze state changes
//! - Error messages

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows the scheduled alarm time.
    pub fn show_scheduled(target: DateTime<Utc>, tz: Tz) {
        let local = target.with_timezone(&tz);
        println!("* Alarm set for {}", local.format("%H:%M on %Y-%m-%d (%Z)"));
        println!("  waiting... (Ctrl+C to cancel)");
    }

    /// Shows that the alarm triggered.
    pub fn show_triggered() {
        println!("!! Alarm triggered!");
        println!("   type 's' to snooze, 'd' to dismiss");
    }

    /// Shows the new snooze fire time.
    pub fn show_snoozed(until: DateTime<Utc>, tz: Tz) {
        let local = until.with_timezone(&tz);
        println!("zz Snoozed! Alarm will trigger again at {}", local.format("%H:%M:%S"));
    }

    /// Shows that the alarm was dismissed.
    pub fn show_dismissed() {
        println!("[] Alarm dismissed");
    }

    /// Shows that a test notification was sent.
    pub fn show_test_fired() {
        println!("* Test alarm fired");
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // Display methods only print; these verify the formatting inputs hold up
    // at the boundaries.

    #[test]
    fn test_show_scheduled_does_not_panic() {
        let t = Utc.timestamp_opt(0, 0).unwrap();
        Display::show_scheduled(t, chrono_tz::Asia::Colombo);
    }

    #[test]
    fn test_show_snoozed_does_not_panic() {
        let t = Utc.timestamp_opt(i32::MAX as i64, 0).unwrap();
        Display::show_snoozed(t, chrono_tz::UTC);
    }
}
