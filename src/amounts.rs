//! Shared numeric helpers for currency amounts.
//!
//! All amounts in the crate are plain `f64` currency values in one common
//! unit. Comparisons use `SPLIT_TOLERANCE` (0.01) for "equal" and
//! `INVOLVEMENT_EPSILON` (0.005) for "non-zero", so that artifacts of equal
//! division (100 / 3 = 33.333...) never trip validation. Rounding is a
//! display concern only and must never happen mid-calculation.

use crate::constants::{INVOLVEMENT_EPSILON, SPLIT_TOLERANCE};
use crate::models::Allocation;

/// Parses user-entered text as a non-negative amount. Invalid, non-finite
/// or negative input clamps to 0 rather than erroring.
pub fn parse_amount(text: &str) -> f64 {
    let parsed = text.trim().parse::<f64>().unwrap_or(0.0);
    if parsed.is_finite() { parsed.max(0.0) } else { 0.0 }
}

/// Two amounts are equal when they differ by less than the split tolerance.
pub fn amounts_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < SPLIT_TOLERANCE
}

/// An amount above the involvement epsilon counts as a real share.
pub fn is_involved_amount(amount: f64) -> bool {
    amount > INVOLVEMENT_EPSILON
}

/// Heuristic used when reloading a stored split: it looks equal when every
/// involved amount is within tolerance of the first one. Zero or one
/// involved member is trivially equal. A custom split whose shares happen to
/// coincide is reported as equal; the stored amounts are unaffected.
pub fn allocations_look_equal(allocations: &[Allocation]) -> bool {
    let mut involved = allocations.iter().filter(|a| is_involved_amount(a.amount));
    let Some(first) = involved.next() else {
        return true;
    };
    involved.all(|a| amounts_equal(a.amount, first.amount))
}

/// Rounds to whole cents for presentation.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
