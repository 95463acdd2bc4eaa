//! # period-engine
//!
//! Endpoint-aware time periods for calendar agents.
//!
//! A [`Period`] is a directed span between two instants. Unlike a plain
//! duration it remembers the endpoints that produced it, which makes calendar
//! decomposition (years, months, weeks, days, ...) and day-by-day iteration
//! possible. Periods can run backward in time; the interval-set algebra treats
//! them by their chronological bounds so direction never changes the result.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use period_engine::{merge_periods, Intersection, Period};
//!
//! let day = |d| Utc.with_ymd_and_hms(2026, 3, d, 0, 0, 0).unwrap();
//!
//! let a = Period::new(day(1), day(5));
//! let b = Period::new(day(3), day(8));
//! assert_eq!(a.intersect(&[b.clone()]), Intersection::Found(Period::new(day(3), day(5))));
//!
//! let merged = merge_periods(&[Period::new(day(9), day(12)), a, b]);
//! assert_eq!(merged, vec![Period::new(day(1), day(8)), Period::new(day(9), day(12))]);
//! ```
//!
//! ## Modules
//!
//! - [`instant`] — Instant conversion, calendar units, stepping and truncation
//! - [`diff`] — Calendar-aware difference between two instants
//! - [`period`] — `Period` construction, decomposition and containment
//! - [`range`] — Lazy iteration over calendar units within a period
//! - [`arith`] — Arithmetic by delegation to `chrono::TimeDelta`
//! - [`algebra`] — Intersection, exclusion and merging of periods
//! - [`error`] — Error types

pub mod algebra;
pub mod arith;
pub mod diff;
pub mod error;
pub mod instant;
pub mod period;
pub mod range;

pub use algebra::{merge_periods, Exclusion, Intersection};
pub use diff::{calendar_diff, CalendarDiff};
pub use error::PeriodError;
pub use instant::{to_instant, Instant, IntoInstant, Unit};
pub use period::Period;
pub use range::PeriodRange;
