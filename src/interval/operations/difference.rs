use super::union::merge_into;
use crate::interval::Interval;

/// Removes `cut` from `set`, returning the closure of the difference.
///
/// Both slices must be canonical. Taking the closure keeps every piece a
/// closed interval: cutting `[2, 4]` out of `[0, 10]` leaves `[0, 2]` and
/// `[4, 10]`, and cutting a set out of itself leaves nothing. Cutting a single
/// point out of the middle of an interval leaves it unchanged.
pub fn compute_difference(set: &[Interval], cut: &[Interval]) -> Vec<Interval> {
    debug_assert!(super::assertions::is_canonical(set));
    debug_assert!(super::assertions::is_canonical(cut));
    let mut result: Vec<Interval> = Vec::with_capacity(set.len() + cut.len());
    let mut first = 0usize;

    for iv in set {
        // Cuts ending before this interval cannot reach any later one either.
        while first < cut.len() && cut[first].upper() < iv.lower() {
            first += 1;
        }

        let mut lower = iv.lower();
        let mut consumed = false;
        for c in cut[first..].iter().take_while(|c| c.lower() <= iv.upper()) {
            if c.lower() > lower {
                merge_into(&mut result, Interval::new(lower, c.lower()));
            }
            if c.upper() >= iv.upper() {
                consumed = true;
                break;
            }
            lower = lower.max(c.upper());
        }

        if !consumed {
            merge_into(&mut result, Interval::new(lower, iv.upper()));
        }
    }

    result
}
