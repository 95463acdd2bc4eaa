//! Lazy iteration over calendar units within a period.

use crate::instant::{shift, Instant, Unit};
use crate::period::Period;
use log::trace;
use std::iter::FusedIterator;

/// Iterator over `start, start ± amount, start ± 2·amount, ...` while the value
/// has not passed `end`.
///
/// Each value is computed from `start` rather than from the previous value,
/// so month stepping from the 31st does not drift to the 28th.
#[derive(Debug, Clone)]
pub struct PeriodRange {
    start: Instant,
    end: Instant,
    unit: Unit,
    step: i64,
    index: i64,
    done: bool,
}

impl PeriodRange {
    fn new(period: &Period, unit: Unit, amount: u32) -> Self {
        let step = i64::from(amount) * period.sign();
        trace!("range over {} by {} {}", period, step, unit);
        PeriodRange {
            start: period.start(),
            end: period.end(),
            unit,
            step,
            index: 0,
            done: amount == 0,
        }
    }

    fn in_bounds(&self, value: Instant) -> bool {
        if self.step > 0 {
            value <= self.end
        } else {
            value >= self.end
        }
    }
}

impl Iterator for PeriodRange {
    type Item = Instant;

    fn next(&mut self) -> Option<Instant> {
        if self.done {
            return None;
        }
        let value = self
            .index
            .checked_mul(self.step)
            .and_then(|n| shift(self.start, self.unit, n))
            .filter(|value| self.in_bounds(*value));

        match value {
            Some(value) => {
                self.index += 1;
                Some(value)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl FusedIterator for PeriodRange {}

impl Period {
    /// Lazily step from `start` toward `end` by `amount` units, inclusive of `end`.
    ///
    /// An inverted relative period steps backward. `amount == 0` yields nothing.
    pub fn xrange(&self, unit: Unit, amount: u32) -> PeriodRange {
        PeriodRange::new(self, unit, amount)
    }

    /// Eager form of [`Period::xrange`].
    pub fn range(&self, unit: Unit, amount: u32) -> Vec<Instant> {
        self.xrange(unit, amount).collect()
    }
}

/// Iterates day by day.
impl<'a> IntoIterator for &'a Period {
    type Item = Instant;
    type IntoIter = PeriodRange;

    fn into_iter(self) -> PeriodRange {
        self.xrange(Unit::Days, 1)
    }
}
