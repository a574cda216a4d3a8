//! Debug-only invariant checks for canonical interval slices.

use crate::interval::Interval;

/// Returns true if `intervals` is canonical: sorted by lower bound, with a
/// strict gap between each interval and the next (no overlap, no touching).
pub fn is_canonical(intervals: &[Interval]) -> bool {
    intervals
        .windows(2)
        .all(|w| w[0].upper() < w[1].lower())
}
