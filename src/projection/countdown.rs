//! Time remaining until a target date.
//!
//! Pure function of "now" and the target; re-rendering on a timer is the
//! caller's business.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Whole days/hours/minutes/seconds left until a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Remaining time from `now` until midnight at the start of `target`.
    ///
    /// All zero once the target has been reached.
    pub fn between(now: NaiveDateTime, target: NaiveDate) -> Self {
        let target = target.and_time(NaiveTime::MIN);
        let remaining = (target - now).num_seconds();
        if remaining <= 0 {
            return Self::default();
        }
        Self {
            days: remaining / 86_400,
            hours: remaining % 86_400 / 3_600,
            minutes: remaining % 3_600 / 60,
            seconds: remaining % 60,
        }
    }

    pub fn is_elapsed(&self) -> bool {
        *self == Self::default()
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:03}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
