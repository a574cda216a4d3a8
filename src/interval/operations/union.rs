use crate::interval::Interval;

/// Appends `iv` to `result`, merging it into the last interval when the two
/// overlap or touch.
pub(crate) fn merge_into(result: &mut Vec<Interval>, iv: Interval) {
    if let Some(last) = result.last_mut() {
        if last.upper() >= iv.lower() {
            if iv.upper() > last.upper() {
                *last = Interval::new(last.lower(), iv.upper());
            }
            return;
        }
    }
    result.push(iv);
}

/// Computes the union of two canonical interval slices.
///
/// The result is canonical: overlapping and touching intervals from either
/// side are merged into a single span.
pub fn compute_union(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    debug_assert!(super::assertions::is_canonical(a));
    debug_assert!(super::assertions::is_canonical(b));
    let mut result: Vec<Interval> = Vec::with_capacity(a.len() + b.len());
    let mut i = 0usize;
    let mut j = 0usize;

    while i < a.len() && j < b.len() {
        if a[i].lower() <= b[j].lower() {
            merge_into(&mut result, a[i]);
            i += 1;
        } else {
            merge_into(&mut result, b[j]);
            j += 1;
        }
    }

    for iv in &a[i..] {
        merge_into(&mut result, *iv);
    }
    for iv in &b[j..] {
        merge_into(&mut result, *iv);
    }

    result
}
