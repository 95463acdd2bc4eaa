//! `Period`: a directed span between two instants.
//!
//! Construction normalizes once and the result is frozen: an absolute period
//! is always stored chronologically ordered, a relative one keeps the caller's
//! order and records the reversal in `invert`. The calendar breakdown is
//! computed at the same time on the ordered pair.

use crate::diff::{calendar_diff, CalendarDiff};
use crate::instant::{
    is_weekday, is_weekend, shift, start_of, to_instant, Instant, IntoInstant, Unit,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A span of time that knows the instants that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PeriodRepr", into = "PeriodRepr")]
pub struct Period {
    start: Instant,
    end: Instant,
    absolute: bool,
    invert: bool,
    delta: CalendarDiff,
}

/// Wire form of a period: the construction triple.
#[derive(Serialize, Deserialize)]
struct PeriodRepr {
    start: Instant,
    end: Instant,
    #[serde(default)]
    absolute: bool,
}

impl From<PeriodRepr> for Period {
    fn from(repr: PeriodRepr) -> Self {
        Period::with_absolute(repr.start, repr.end, repr.absolute)
    }
}

impl From<Period> for PeriodRepr {
    fn from(period: Period) -> Self {
        PeriodRepr {
            start: period.start,
            end: period.end,
            absolute: period.absolute,
        }
    }
}

impl Period {
    /// A relative period from `start` to `end`. If `end` precedes `start` the
    /// period is inverted and keeps that order.
    pub fn new(start: impl IntoInstant, end: impl IntoInstant) -> Self {
        Self::with_absolute(start, end, false)
    }

    /// An absolute period: endpoints are reordered so that `start <= end`.
    pub fn new_absolute(start: impl IntoInstant, end: impl IntoInstant) -> Self {
        Self::with_absolute(start, end, true)
    }

    pub fn with_absolute(start: impl IntoInstant, end: impl IntoInstant, absolute: bool) -> Self {
        let mut start = to_instant(start);
        let mut end = to_instant(end);
        if absolute && start > end {
            std::mem::swap(&mut start, &mut end);
        }
        let delta = calendar_diff(start, end);

        Period {
            start,
            end,
            absolute,
            invert: delta.invert,
            delta,
        }
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// True when the caller's end preceded the start and `absolute` did not
    /// reorder them.
    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    pub fn delta(&self) -> &CalendarDiff {
        &self.delta
    }

    /// Chronologically earlier endpoint.
    pub fn lower(&self) -> Instant {
        if self.invert {
            self.end
        } else {
            self.start
        }
    }

    /// Chronologically later endpoint.
    pub fn upper(&self) -> Instant {
        if self.invert {
            self.start
        } else {
            self.end
        }
    }

    /// The construction triple; `Period::with_absolute` on it yields an equal period.
    pub fn into_parts(self) -> (Instant, Instant, bool) {
        (self.start, self.end, self.absolute)
    }

    /// `-1` for an inverted relative period, `1` otherwise.
    pub(crate) fn sign(&self) -> i64 {
        if !self.absolute && self.invert {
            -1
        } else {
            1
        }
    }

    // -- Calendar decomposition ------------------------------------------------

    pub fn years(&self) -> i64 {
        self.delta.years
    }

    pub fn months(&self) -> i64 {
        self.delta.months
    }

    pub fn weeks(&self) -> i64 {
        self.delta.days / 7
    }

    pub fn days(&self) -> i64 {
        self.delta.days
    }

    /// Days left over after whole weeks, negative for an inverted relative period.
    pub fn remaining_days(&self) -> i64 {
        (self.delta.days % 7) * self.sign()
    }

    pub fn hours(&self) -> i64 {
        self.delta.hours
    }

    pub fn minutes(&self) -> i64 {
        self.delta.minutes
    }

    /// Seconds left over after whole minutes.
    pub fn seconds(&self) -> i64 {
        self.delta.seconds
    }

    pub fn in_years(&self) -> i64 {
        self.delta.years
    }

    pub fn in_months(&self) -> i64 {
        self.delta.total_months()
    }

    /// Number of weekdays touched by the period, both end days included.
    pub fn in_weekdays(&self) -> i64 {
        self.count_days(is_weekday)
    }

    /// Number of Saturdays and Sundays touched by the period, both end days included.
    pub fn in_weekend_days(&self) -> i64 {
        self.count_days(is_weekend)
    }

    fn count_days(&self, wanted: fn(&Instant) -> bool) -> i64 {
        let mut day = start_of(self.lower(), Unit::Days);
        let last = start_of(self.upper(), Unit::Days);

        let mut count = 0;
        while day <= last {
            if wanted(&day) {
                count += 1;
            }
            match shift(day, Unit::Days, 1) {
                Some(next) => day = next,
                None => break,
            }
        }
        count * self.sign()
    }

    /// Whether `value` lies within the period's chronological bounds, inclusive.
    pub fn contains(&self, value: impl IntoInstant) -> bool {
        let value = to_instant(value);
        self.lower() <= value && value <= self.upper()
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic on `(start, end)`, ties broken by `absolute`.
impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.start, self.end, self.absolute).cmp(&(other.start, other.end, other.absolute))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}
