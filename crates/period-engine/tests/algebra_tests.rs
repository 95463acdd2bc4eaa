//! Tests for intersection, exclusion and merging of periods.

use chrono::{DateTime, TimeZone, Utc};
use period_engine::{merge_periods, Exclusion, Intersection, Period};

/// Midnight UTC on the given day of March 2026.
fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, d, 0, 0, 0).unwrap()
}

fn p(start: u32, end: u32) -> Period {
    Period::new(day(start), day(end))
}

// ---------------------------------------------------------------------------
// intersect
// ---------------------------------------------------------------------------

#[test]
fn intersect_overlapping_pair() {
    assert_eq!(p(1, 5).intersect(&[p(3, 8)]), Intersection::Found(p(3, 5)));
}

#[test]
fn intersect_is_order_independent() {
    assert_eq!(p(3, 8).intersect(&[p(1, 5)]), Intersection::Found(p(3, 5)));
}

#[test]
fn intersect_disjoint_pair() {
    let result = p(1, 2).intersect(&[p(5, 8)]);
    assert!(result.is_disjoint());
    assert_eq!(result.period(), None);
}

#[test]
fn intersect_narrows_across_many() {
    let result = p(1, 20).intersect(&[p(3, 15), p(5, 18), p(2, 10)]);
    assert_eq!(result, Intersection::Found(p(5, 10)));
}

#[test]
fn intersect_fails_when_any_input_is_disjoint_from_running_window() {
    // p(1, 4) overlaps p(1, 20) but not the window narrowed to 5..10.
    let result = p(1, 20).intersect(&[p(5, 10), p(1, 4)]);
    assert_eq!(result, Intersection::Disjoint);
}

#[test]
fn intersect_touching_gives_zero_length_window() {
    let result = p(1, 5).intersect(&[p(5, 8)]).period().unwrap();
    assert_eq!(result.start(), day(5));
    assert_eq!(result.end(), day(5));
}

#[test]
fn intersect_with_nothing_is_self() {
    assert_eq!(p(2, 9).intersect(&[]), Intersection::Found(p(2, 9)));
}

#[test]
fn intersect_uses_chronological_bounds_of_inverted_periods() {
    let result = p(8, 3).intersect(&[p(1, 5)]);
    assert_eq!(result, Intersection::Found(p(3, 5)));
}

// ---------------------------------------------------------------------------
// exclude_one
// ---------------------------------------------------------------------------

#[test]
fn exclude_one_fully_covered() {
    assert_eq!(p(3, 6).exclude_one(&p(1, 6)), Exclusion::FullyConsumed);
    assert!(p(3, 6).exclude_one(&p(3, 6)).is_fully_consumed());
    assert!(p(3, 6).exclude_one(&p(2, 9)).is_fully_consumed());
}

#[test]
fn exclude_one_covers_head() {
    assert_eq!(
        p(3, 6).exclude_one(&p(1, 4)),
        Exclusion::Remainder(vec![p(4, 6)])
    );
    assert_eq!(
        p(3, 6).exclude_one(&p(3, 4)),
        Exclusion::Remainder(vec![p(4, 6)])
    );
}

#[test]
fn exclude_one_covers_tail() {
    assert_eq!(
        p(3, 6).exclude_one(&p(5, 9)),
        Exclusion::Remainder(vec![p(3, 5)])
    );
    assert_eq!(
        p(3, 6).exclude_one(&p(5, 6)),
        Exclusion::Remainder(vec![p(3, 5)])
    );
}

#[test]
fn exclude_one_interior_splits_in_two() {
    assert_eq!(
        p(3, 10).exclude_one(&p(5, 7)),
        Exclusion::Remainder(vec![p(3, 5), p(7, 10)])
    );
}

#[test]
fn exclude_one_non_overlapping_leaves_period_unchanged() {
    assert_eq!(
        p(3, 6).exclude_one(&p(1, 3)),
        Exclusion::Remainder(vec![p(3, 6)])
    );
    assert_eq!(
        p(3, 6).exclude_one(&p(6, 9)),
        Exclusion::Remainder(vec![p(3, 6)])
    );
    assert_eq!(
        p(3, 6).exclude_one(&p(8, 9)),
        Exclusion::Remainder(vec![p(3, 6)])
    );
}

#[test]
fn exclude_one_unchanged_keeps_inverted_period() {
    let inverted = p(6, 3);
    assert_eq!(
        inverted.exclude_one(&p(8, 9)),
        Exclusion::Remainder(vec![inverted.clone()])
    );
}

#[test]
fn exclude_one_with_inverted_operands_uses_chronological_bounds() {
    assert_eq!(
        p(6, 3).exclude_one(&p(4, 1)),
        Exclusion::Remainder(vec![p(4, 6)])
    );
}

// ---------------------------------------------------------------------------
// exclude
// ---------------------------------------------------------------------------

#[test]
fn exclude_nothing_returns_self() {
    assert_eq!(p(1, 10).exclude(&[]), vec![p(1, 10)]);
}

#[test]
fn exclude_is_applied_left_to_right_to_every_piece() {
    let result = p(1, 14).exclude(&[p(4, 6), p(2, 3), p(9, 11)]);
    assert_eq!(result, vec![p(1, 2), p(3, 4), p(6, 9), p(11, 14)]);
}

#[test]
fn exclude_stops_once_nothing_remains() {
    let result = p(3, 6).exclude(&[p(1, 8), p(4, 5)]);
    assert!(result.is_empty());
}

#[test]
fn exclude_overlapping_exclusions() {
    let result = p(1, 10).exclude(&[p(2, 5), p(4, 7)]);
    assert_eq!(result, vec![p(1, 2), p(7, 10)]);
}

// ---------------------------------------------------------------------------
// exclude_from
// ---------------------------------------------------------------------------

#[test]
fn exclude_from_interior_of_first_period() {
    let result = p(4, 5).exclude_from(&[p(3, 6), p(9, 12)]);
    assert_eq!(result, vec![p(3, 4), p(5, 6), p(9, 12)]);
}

#[test]
fn exclude_from_is_independent_per_period() {
    // The same exclusion is applied to each target, not cumulatively.
    let result = p(4, 10).exclude_from(&[p(3, 6), p(3, 6)]);
    assert_eq!(result, vec![p(3, 4), p(3, 4)]);
}

/// Every placement of an exclusion relative to the targets 3..6 and 9..12.
#[test]
fn exclude_from_boundary_matrix() {
    let first = p(3, 6);
    let second = p(9, 12);
    let targets = [first.clone(), second.clone()];
    let untouched = vec![first.clone(), second.clone()];

    let cases: Vec<(u32, u32, Vec<Period>)> = vec![
        // Before the first period.
        (1, 2, untouched.clone()),
        (1, 3, untouched.clone()),
        // Starting before or at the first period.
        (1, 4, vec![p(4, 6), second.clone()]),
        (3, 4, vec![p(4, 6), second.clone()]),
        (1, 6, vec![second.clone()]),
        (3, 6, vec![second.clone()]),
        (1, 7, vec![second.clone()]),
        (3, 7, vec![second.clone()]),
        (1, 9, vec![second.clone()]),
        (3, 9, vec![second.clone()]),
        (1, 10, vec![p(10, 12)]),
        (3, 10, vec![p(10, 12)]),
        (1, 12, vec![]),
        (3, 12, vec![]),
        (1, 13, vec![]),
        (3, 13, vec![]),
        // Starting inside the first period.
        (4, 5, vec![p(3, 4), p(5, 6), second.clone()]),
        (4, 6, vec![p(3, 4), second.clone()]),
        (4, 7, vec![p(3, 4), second.clone()]),
        (4, 9, vec![p(3, 4), second.clone()]),
        (4, 10, vec![p(3, 4), p(10, 12)]),
        (4, 12, vec![p(3, 4)]),
        (4, 13, vec![p(3, 4)]),
        // Between the periods.
        (6, 7, untouched.clone()),
        (6, 9, untouched.clone()),
        (7, 9, untouched.clone()),
        // Ending inside or after the second period.
        (6, 10, vec![first.clone(), p(10, 12)]),
        (7, 10, vec![first.clone(), p(10, 12)]),
        (9, 10, vec![first.clone(), p(10, 12)]),
        (6, 12, vec![first.clone()]),
        (7, 12, vec![first.clone()]),
        (9, 12, vec![first.clone()]),
        (6, 13, vec![first.clone()]),
        (7, 13, vec![first.clone()]),
        (9, 13, vec![first.clone()]),
        // Starting inside the second period.
        (10, 11, vec![first.clone(), p(9, 10), p(11, 12)]),
        (10, 12, vec![first.clone(), p(9, 10)]),
        (10, 13, vec![first.clone(), p(9, 10)]),
        // After the second period.
        (12, 14, untouched.clone()),
        (13, 14, untouched.clone()),
    ];

    for (start, end, expected) in cases {
        let excluded = p(start, end).exclude_from(&targets);
        assert_eq!(
            excluded, expected,
            "excluding {}..{} from 3..6 and 9..12",
            start, end
        );
    }
}

// ---------------------------------------------------------------------------
// merge
// ---------------------------------------------------------------------------

#[test]
fn merge_sorts_and_joins_overlaps() {
    let merged = merge_periods(&[p(9, 12), p(3, 6), p(5, 7)]);
    assert_eq!(merged, vec![p(3, 7), p(9, 12)]);
}

#[test]
fn merge_empty_input() {
    assert!(merge_periods(&[]).is_empty());
}

#[test]
fn merge_joins_touching_periods() {
    assert_eq!(merge_periods(&[p(1, 3), p(3, 5)]), vec![p(1, 5)]);
}

#[test]
fn merge_never_shrinks_running_period() {
    assert_eq!(merge_periods(&[p(1, 10), p(2, 4), p(5, 6)]), vec![p(1, 10)]);
}

#[test]
fn merge_keeps_unextended_periods_as_given() {
    let absolute = Period::new_absolute(day(12), day(9));
    let merged = merge_periods(&[absolute.clone(), p(1, 2)]);
    assert_eq!(merged, vec![p(1, 2), absolute]);
}

#[test]
fn merge_orders_inverted_periods_chronologically() {
    let merged = merge_periods(&[p(12, 9), p(6, 3), p(7, 5)]);
    assert_eq!(merged, vec![p(3, 7), p(12, 9)]);
}

#[test]
fn merge_method_includes_receiver() {
    assert_eq!(p(5, 7).merge(&[p(9, 12), p(3, 6)]), vec![p(3, 7), p(9, 12)]);
}
