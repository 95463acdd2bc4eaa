//! Arithmetic by delegation to `chrono::TimeDelta`.
//!
//! A period converts itself to its signed elapsed time (`end - start`) and
//! the operation runs on that duration. Only negation and `abs` return periods.

use crate::error::{PeriodError, Result};
use crate::period::Period;
use chrono::TimeDelta;
use std::ops::{Add, Mul, Neg, Sub};

const NANOS_PER_SEC: i128 = 1_000_000_000;

impl Period {
    /// Signed elapsed time, negative for an inverted relative period.
    pub fn as_duration(&self) -> TimeDelta {
        self.end() - self.start()
    }

    pub fn in_weeks(&self) -> i64 {
        self.as_duration().num_weeks()
    }

    pub fn in_days(&self) -> i64 {
        self.as_duration().num_days()
    }

    pub fn in_hours(&self) -> i64 {
        self.as_duration().num_hours()
    }

    pub fn in_minutes(&self) -> i64 {
        self.as_duration().num_minutes()
    }

    pub fn in_seconds(&self) -> i64 {
        self.as_duration().num_seconds()
    }

    pub fn total_seconds(&self) -> f64 {
        let duration = self.as_duration();
        duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) / 1e9
    }

    /// The same span as an absolute period.
    pub fn abs(&self) -> Period {
        Period::with_absolute(self.start(), self.end(), true)
    }

    /// Elapsed time plus `rhs`, without the overflow panic of the `+` operator.
    pub fn checked_add(&self, rhs: TimeDelta) -> Result<TimeDelta> {
        self.as_duration()
            .checked_add(&rhs)
            .ok_or_else(|| PeriodError::Overflow(format!("{} + {}", self, rhs)))
    }

    /// Elapsed time minus `rhs`, without the overflow panic of the `-` operator.
    pub fn checked_sub(&self, rhs: TimeDelta) -> Result<TimeDelta> {
        self.as_duration()
            .checked_sub(&rhs)
            .ok_or_else(|| PeriodError::Overflow(format!("{} - {}", self, rhs)))
    }

    /// Divide the elapsed time by an integer, truncating toward zero.
    pub fn checked_div(&self, rhs: i32) -> Result<TimeDelta> {
        if rhs == 0 {
            return Err(PeriodError::DivisionByZero);
        }
        self.as_duration()
            .checked_div(rhs)
            .ok_or_else(|| PeriodError::Overflow(format!("{} / {}", self, rhs)))
    }

    /// Ratio of the elapsed time to `rhs`.
    pub fn div_duration(&self, rhs: TimeDelta) -> Result<f64> {
        let divisor = nanos(rhs);
        if divisor == 0 {
            return Err(PeriodError::DivisionByZero);
        }
        Ok(nanos(self.as_duration()) as f64 / divisor as f64)
    }

    /// How many whole `rhs` fit in the elapsed time, rounded toward negative infinity.
    pub fn floor_div(&self, rhs: TimeDelta) -> Result<i64> {
        let (quotient, _) = self.div_rem(rhs)?;
        Ok(quotient)
    }

    /// Remainder of [`Period::floor_div`]; carries the sign of `rhs`.
    pub fn checked_rem(&self, rhs: TimeDelta) -> Result<TimeDelta> {
        let (_, remainder) = self.div_rem(rhs)?;
        Ok(remainder)
    }

    /// Floor quotient and remainder together.
    pub fn div_rem(&self, rhs: TimeDelta) -> Result<(i64, TimeDelta)> {
        let divisor = nanos(rhs);
        if divisor == 0 {
            return Err(PeriodError::DivisionByZero);
        }
        let dividend = nanos(self.as_duration());

        let mut quotient = dividend / divisor;
        if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
            quotient -= 1;
        }
        let remainder = dividend - quotient * divisor;

        let quotient = i64::try_from(quotient)
            .map_err(|_| PeriodError::Overflow(format!("{} // {}", self, rhs)))?;
        Ok((quotient, from_nanos(remainder)?))
    }
}

fn nanos(duration: TimeDelta) -> i128 {
    i128::from(duration.num_seconds()) * NANOS_PER_SEC + i128::from(duration.subsec_nanos())
}

fn from_nanos(total: i128) -> Result<TimeDelta> {
    let overflow = || PeriodError::Overflow(format!("{} ns", total));
    let secs = i64::try_from(total.div_euclid(NANOS_PER_SEC)).map_err(|_| overflow())?;
    let subsec = u32::try_from(total.rem_euclid(NANOS_PER_SEC)).map_err(|_| overflow())?;
    TimeDelta::new(secs, subsec).ok_or_else(overflow)
}

/// Panics on overflow like `TimeDelta`'s own `+`; see [`Period::checked_add`].
impl Add<TimeDelta> for &Period {
    type Output = TimeDelta;

    fn add(self, rhs: TimeDelta) -> TimeDelta {
        self.as_duration() + rhs
    }
}

impl Add<TimeDelta> for Period {
    type Output = TimeDelta;

    fn add(self, rhs: TimeDelta) -> TimeDelta {
        &self + rhs
    }
}

/// Panics on overflow like `TimeDelta`'s own `-`; see [`Period::checked_sub`].
impl Sub<TimeDelta> for &Period {
    type Output = TimeDelta;

    fn sub(self, rhs: TimeDelta) -> TimeDelta {
        self.as_duration() - rhs
    }
}

impl Sub<TimeDelta> for Period {
    type Output = TimeDelta;

    fn sub(self, rhs: TimeDelta) -> TimeDelta {
        &self - rhs
    }
}

impl Mul<i32> for &Period {
    type Output = TimeDelta;

    fn mul(self, rhs: i32) -> TimeDelta {
        self.as_duration() * rhs
    }
}

impl Mul<i32> for Period {
    type Output = TimeDelta;

    fn mul(self, rhs: i32) -> TimeDelta {
        &self * rhs
    }
}

/// Swaps the endpoints, keeping `absolute`.
impl Neg for &Period {
    type Output = Period;

    fn neg(self) -> Period {
        Period::with_absolute(self.end(), self.start(), self.is_absolute())
    }
}

impl Neg for Period {
    type Output = Period;

    fn neg(self) -> Period {
        -&self
    }
}
