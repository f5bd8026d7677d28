//! Remaining-time breakdown for a countdown target

use chrono::{DateTime, Utc};

use crate::utils::Clock;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time left until a target, split into display units
///
/// The unit fields are only meaningful while `total > 0`; check
/// [`RemainingDuration::is_elapsed`] before showing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainingDuration {
    /// Milliseconds until the target, zero or negative once elapsed
    pub total: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl RemainingDuration {
    /// Decompose a millisecond count into days, hours, minutes and seconds
    pub fn from_millis(total: i64) -> Self {
        Self {
            total,
            days: total / MS_PER_DAY,
            hours: (total / MS_PER_HOUR) % 24,
            minutes: (total / MS_PER_MINUTE) % 60,
            seconds: (total / MS_PER_SECOND) % 60,
        }
    }

    /// Breakdown of the time between `now` and `target`
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_millis((target - now).num_milliseconds())
    }

    /// Whether the target instant has been reached
    pub fn is_elapsed(&self) -> bool {
        self.total <= 0
    }
}

/// Compute the remaining time for an optional target against the given clock
///
/// Returns `None` when there is no target, meaning there is nothing to show.
pub fn time_remaining(target: Option<DateTime<Utc>>, clock: &dyn Clock) -> Option<RemainingDuration> {
    target.map(|target| RemainingDuration::until(target, clock.now()))
}
