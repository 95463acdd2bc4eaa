//! Calendar-aware difference between two instants.
//!
//! Whole months are borrowed first: the largest `N` such that `earlier + N months`
//! (day clamped to the month end) does not pass `later`. The rest is split into
//! days, hours, minutes and seconds of exact elapsed time.

use crate::instant::{shift, Instant, Unit};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Structured breakdown of the span between two instants.
///
/// All magnitudes are non-negative. `invert` records that the second
/// argument of [`calendar_diff`] preceded the first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDiff {
    pub years: i64,
    /// Months left over after whole years (0..=11).
    pub months: i64,
    pub days: i64,
    /// 0..=23
    pub hours: i64,
    /// 0..=59
    pub minutes: i64,
    /// 0..=59
    pub seconds: i64,
    pub nanoseconds: u32,
    pub invert: bool,
}

impl CalendarDiff {
    /// `years * 12 + months`.
    pub fn total_months(&self) -> i64 {
        self.years * 12 + self.months
    }

    /// Remaining seconds including the sub-second fraction.
    pub fn fractional_seconds(&self) -> f64 {
        self.seconds as f64 + f64::from(self.nanoseconds) / 1e9
    }

    pub fn is_zero(&self) -> bool {
        self.total_months() == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.nanoseconds == 0
    }
}

/// Compute the calendar breakdown between `from` and `to`.
///
/// The breakdown is always computed on the chronologically ordered pair;
/// `invert` is set when `to < from`.
pub fn calendar_diff(from: Instant, to: Instant) -> CalendarDiff {
    let invert = to < from;
    let (earlier, later) = if invert { (to, from) } else { (from, to) };

    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month())
        - i64::from(earlier.month());
    let mut anchor = earlier;
    while months > 0 {
        match shift(earlier, Unit::Months, months) {
            Some(candidate) if candidate <= later => {
                anchor = candidate;
                break;
            }
            _ => months -= 1,
        }
    }

    let rest = later - anchor;
    CalendarDiff {
        years: months / 12,
        months: months % 12,
        days: rest.num_days(),
        hours: rest.num_hours() % 24,
        minutes: rest.num_minutes() % 60,
        seconds: rest.num_seconds() % 60,
        nanoseconds: rest.subsec_nanos().unsigned_abs(),
        invert,
    }
}
