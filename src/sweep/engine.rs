//! The sweep loop: one independent top-to-bottom pass per anchor line.

use log::trace;

use super::events::{EventIndex, LineGroup};
use super::state::SweepState;
use crate::geometry::Rectangle;

/// Runs the sweep below a single anchor group and returns its candidates in
/// the order they were found.
pub fn sweep_anchor(index: &EventIndex, anchor: &LineGroup) -> Vec<Rectangle> {
    let mut state = SweepState::new(anchor);
    for line in index.tops() {
        if state.is_exhausted() {
            break;
        }
        state.advance(line);
    }
    trace!(
        "anchor y={} ({} defects): {} candidates",
        anchor.y(),
        anchor.defects().len(),
        state.candidates().len()
    );
    state.into_candidates()
}

/// Sweeps below every distinct bottom line, concatenating the candidates in
/// ascending anchor order.
#[cfg(not(feature = "parallel"))]
pub fn sweep_all(index: &EventIndex) -> Vec<Rectangle> {
    index
        .bottoms()
        .iter()
        .flat_map(|anchor| sweep_anchor(index, anchor))
        .collect()
}

/// Sweeps below every distinct bottom line on the rayon pool. The result is
/// ordered exactly like the sequential run.
#[cfg(feature = "parallel")]
pub fn sweep_all(index: &EventIndex) -> Vec<Rectangle> {
    use rayon::prelude::*;

    let per_anchor: Vec<Vec<Rectangle>> = index
        .bottoms()
        .par_iter()
        .map(|anchor| sweep_anchor(index, anchor))
        .collect();
    per_anchor.into_iter().flatten().collect()
}
