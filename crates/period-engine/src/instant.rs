//! Instants, calendar units, and the stepping/truncation a period needs from them.
//!
//! Every entry point that accepts a point in time goes through [`to_instant`],
//! so the rest of the crate only ever sees `DateTime<Utc>`.

use chrono::{
    DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
    Timelike, Utc, Weekday,
};
use std::fmt;

/// The point-in-time type periods are built from.
pub type Instant = DateTime<Utc>;

/// Calendar units used for stepping and truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Years => "years",
            Unit::Months => "months",
            Unit::Weeks => "weeks",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

/// Conversion into an [`Instant`].
///
/// Implemented for zoned chrono datetimes (converted to UTC), naive datetimes
/// (interpreted as UTC) and naive dates (midnight UTC).
pub trait IntoInstant {
    fn into_instant(self) -> Instant;
}

impl<Tz: TimeZone> IntoInstant for DateTime<Tz> {
    fn into_instant(self) -> Instant {
        self.with_timezone(&Utc)
    }
}

impl IntoInstant for NaiveDateTime {
    fn into_instant(self) -> Instant {
        Utc.from_utc_datetime(&self)
    }
}

impl IntoInstant for NaiveDate {
    fn into_instant(self) -> Instant {
        Utc.from_utc_datetime(&self.and_time(NaiveTime::MIN))
    }
}

/// Convert any supported time value into an [`Instant`].
pub fn to_instant<T: IntoInstant>(value: T) -> Instant {
    value.into_instant()
}

/// Shift `instant` by `n` units; negative `n` steps backward.
///
/// Month and year steps clamp the day to the end of the target month
/// (Jan 31 + 1 month = Feb 28/29). Returns `None` when the result falls
/// outside chrono's representable range.
pub fn shift(instant: Instant, unit: Unit, n: i64) -> Option<Instant> {
    match unit {
        Unit::Years => shift_months(instant, n.checked_mul(12)?),
        Unit::Months => shift_months(instant, n),
        Unit::Weeks => instant.checked_add_signed(TimeDelta::try_weeks(n)?),
        Unit::Days => instant.checked_add_signed(TimeDelta::try_days(n)?),
        Unit::Hours => instant.checked_add_signed(TimeDelta::try_hours(n)?),
        Unit::Minutes => instant.checked_add_signed(TimeDelta::try_minutes(n)?),
        Unit::Seconds => instant.checked_add_signed(TimeDelta::try_seconds(n)?),
    }
}

fn shift_months(instant: Instant, n: i64) -> Option<Instant> {
    let months = Months::new(u32::try_from(n.unsigned_abs()).ok()?);
    if n >= 0 {
        instant.checked_add_months(months)
    } else {
        instant.checked_sub_months(months)
    }
}

/// Truncate `instant` to the start of the given unit. Weeks start on Monday.
pub fn start_of(instant: Instant, unit: Unit) -> Instant {
    let date = instant.date_naive();
    let naive = match unit {
        Unit::Years => date.with_ordinal(1).unwrap_or(date).and_time(NaiveTime::MIN),
        Unit::Months => date.with_day(1).unwrap_or(date).and_time(NaiveTime::MIN),
        Unit::Weeks => {
            let back = u64::from(date.weekday().num_days_from_monday());
            date.checked_sub_days(Days::new(back))
                .unwrap_or(date)
                .and_time(NaiveTime::MIN)
        }
        Unit::Days => date.and_time(NaiveTime::MIN),
        Unit::Hours => date.and_time(hms(instant.hour(), 0, 0)),
        Unit::Minutes => date.and_time(hms(instant.hour(), instant.minute(), 0)),
        Unit::Seconds => date.and_time(hms(instant.hour(), instant.minute(), instant.second())),
    };
    Utc.from_utc_datetime(&naive)
}

fn hms(hour: u32, minute: u32, second: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, second).unwrap_or(NaiveTime::MIN)
}

/// Monday through Friday.
pub fn is_weekday(instant: &Instant) -> bool {
    !is_weekend(instant)
}

/// Saturday or Sunday.
pub fn is_weekend(instant: &Instant) -> bool {
    matches!(instant.weekday(), Weekday::Sat | Weekday::Sun)
}
