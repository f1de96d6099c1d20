//! Wall-clock time normalization.
//!
//! Converts a user-picked wall-clock time (hour and minute) into the absolute
//! instant of its next occurrence in a fixed time zone. If the picked time has
//! already passed today, the occurrence moves to tomorrow.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

// ============================================================================
// WallTime
// ============================================================================

/// A wall-clock time of day (24-hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallTime {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Minute of hour (0-59)
    pub minute: u32,
}

impl WallTime {
    /// Creates a wall-clock time, validating the ranges.
    pub fn new(hour: u32, minute: u32) -> Result<Self, String> {
        if hour > 23 {
            return Err(format!("hour must be 0-23, got {}", hour));
        }
        if minute > 59 {
            return Err(format!("minute must be 0-59, got {}", minute));
        }
        Ok(Self { hour, minute })
    }
}

impl FromStr for WallTime {
    type Err = String;

    /// Parses `HH:MM` (24-hour).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| format!("expected HH:MM, got '{}'", s))?;
        let hour: u32 = h
            .parse()
            .map_err(|_| format!("invalid hour in '{}'", s))?;
        let minute: u32 = m
            .parse()
            .map_err(|_| format!("invalid minute in '{}'", s))?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Returns the next occurrence of `time` in `tz`, strictly after `now`.
///
/// Combines today's date in `tz` with the chosen hour and minute; if the
/// resulting instant is not strictly after `now`, the date advances by one
/// day. Pure function, no side effects.
///
/// Local instants skipped by a DST transition resolve by scanning forward to
/// the next day on which the wall-clock time exists.
pub fn next_occurrence(time: WallTime, now: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    let today = now.with_timezone(&tz).date_naive();

    for days_ahead in 0..=2 {
        let date = today + Duration::days(days_ahead);
        let Some(naive) = date.and_hms_opt(time.hour, time.minute, 0) else {
            continue;
        };
        // Ambiguous local times (DST fall-back) take the earlier instant.
        if let Some(local) = tz.from_local_datetime(&naive).earliest() {
            let candidate = local.with_timezone(&Utc);
            if candidate > now {
                return candidate;
            }
        }
    }

    // Not reachable for a valid WallTime: within two days there is always a
    // representable future occurrence.
    now + Duration::days(1)
}

// ============================================================================
// Tests
// ============================================================================
