//! Interval-set algebra over periods: intersection, exclusion and merging.
//!
//! Every operation works on chronological bounds (`lower`/`upper`), so an
//! inverted period behaves exactly like its forward counterpart. Inputs are
//! never modified; results are new periods.

use crate::period::Period;
use log::{debug, trace};

/// Outcome of [`Period::intersect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intersection {
    /// The common window of all inputs.
    Found(Period),
    /// At least one input shares no instant with the running window.
    Disjoint,
}

impl Intersection {
    pub fn period(self) -> Option<Period> {
        match self {
            Intersection::Found(period) => Some(period),
            Intersection::Disjoint => None,
        }
    }

    pub fn is_disjoint(&self) -> bool {
        matches!(self, Intersection::Disjoint)
    }
}

/// Outcome of [`Period::exclude_one`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    /// One or two periods left over, in chronological order.
    Remainder(Vec<Period>),
    /// The excluded period covers the whole span.
    FullyConsumed,
}

impl Exclusion {
    /// Leftover periods; empty when fully consumed.
    pub fn into_periods(self) -> Vec<Period> {
        match self {
            Exclusion::Remainder(periods) => periods,
            Exclusion::FullyConsumed => Vec::new(),
        }
    }

    pub fn is_fully_consumed(&self) -> bool {
        matches!(self, Exclusion::FullyConsumed)
    }
}

impl Period {
    /// The window shared by `self` and every period in `others`.
    ///
    /// The window starts as `self` and is narrowed by each input in turn. An
    /// input that ends before the window starts, or starts after it ends, makes
    /// the whole intersection [`Intersection::Disjoint`]. Touching endpoints
    /// produce a zero-length window.
    pub fn intersect(&self, others: &[Period]) -> Intersection {
        let mut start = self.lower();
        let mut end = self.upper();

        for other in others {
            if other.upper() < start || other.lower() > end {
                trace!("{} is disjoint from window {} -> {}", other, start, end);
                return Intersection::Disjoint;
            }
            start = start.max(other.lower());
            end = end.min(other.upper());
        }

        Intersection::Found(Period::new(start, end))
    }

    /// Remove `other`'s span from this period's span.
    ///
    /// Touching at an endpoint counts as covering that side, so no zero-width
    /// remainder is produced there.
    pub fn exclude_one(&self, other: &Period) -> Exclusion {
        let (this_lo, this_hi) = (self.lower(), self.upper());
        let (other_lo, other_hi) = (other.lower(), other.upper());

        if other_hi <= this_lo || other_lo >= this_hi {
            return Exclusion::Remainder(vec![self.clone()]);
        }

        if other_lo <= this_lo {
            if other_hi < this_hi {
                Exclusion::Remainder(vec![Period::new(other_hi, this_hi)])
            } else {
                Exclusion::FullyConsumed
            }
        } else if other_hi < this_hi {
            Exclusion::Remainder(vec![
                Period::new(this_lo, other_lo),
                Period::new(other_hi, this_hi),
            ])
        } else {
            Exclusion::Remainder(vec![Period::new(this_lo, other_lo)])
        }
    }

    /// Subtract `periods` from this period, left to right.
    ///
    /// Each leftover piece has the remaining exclusions applied to it, and the
    /// pieces are returned in order. With nothing to exclude the result is
    /// `[self]`.
    pub fn exclude(&self, periods: &[Period]) -> Vec<Period> {
        let mut remaining = vec![self.clone()];

        for other in periods {
            if remaining.is_empty() {
                break;
            }
            remaining = remaining
                .iter()
                .flat_map(|piece| piece.exclude_one(other).into_periods())
                .collect();
        }

        debug!(
            "excluding {} periods from {} left {} pieces",
            periods.len(),
            self,
            remaining.len()
        );
        remaining
    }

    /// Remove this period from each of `periods` independently.
    ///
    /// Periods this one fully covers contribute nothing.
    pub fn exclude_from(&self, periods: &[Period]) -> Vec<Period> {
        periods
            .iter()
            .flat_map(|period| period.exclude_one(self).into_periods())
            .collect()
    }

    /// [`merge_periods`] over this period and `others`.
    pub fn merge(&self, others: &[Period]) -> Vec<Period> {
        let mut all = Vec::with_capacity(others.len() + 1);
        all.push(self.clone());
        all.extend_from_slice(others);
        merge_periods(&all)
    }
}

/// Merge overlapping or touching periods into a minimal sorted set.
///
/// Periods are sorted by chronological `(lower, upper)`. A period that is
/// never extended comes out unchanged; an extended one is rebuilt as a
/// forward relative period.
pub fn merge_periods(periods: &[Period]) -> Vec<Period> {
    let mut sorted: Vec<&Period> = periods.iter().collect();
    sorted.sort_by_key(|period| (period.lower(), period.upper()));

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    let mut current = first.clone();
    for next in iter {
        if next.lower() <= current.upper() {
            if next.upper() > current.upper() {
                current = Period::new(current.lower(), next.upper());
            }
            continue;
        }
        merged.push(current);
        current = next.clone();
    }
    merged.push(current);

    debug!("merged {} periods into {}", periods.len(), merged.len());
    merged
}
