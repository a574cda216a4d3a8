//! Per-anchor sweep state.

use log::trace;

use super::events::LineGroup;
use crate::geometry::Rectangle;
use crate::interval::IntervalSet;

/// State threaded through one top-to-bottom sweep below a single anchor line.
///
/// The anchor (top context) is the group of defects whose bottom edges sit on
/// the ceiling line. `open_gaps` holds the x-ranges still unobstructed between
/// the ceiling and the current sweep line.
#[derive(Debug, Clone)]
pub struct SweepState<'a> {
    candidates: Vec<Rectangle>,
    anchor: &'a LineGroup,
    ceiling: IntervalSet,
    open_gaps: IntervalSet,
}

impl<'a> SweepState<'a> {
    pub fn new(anchor: &'a LineGroup) -> Self {
        Self {
            candidates: Vec::new(),
            anchor,
            ceiling: IntervalSet::x_projection(anchor.defects()),
            open_gaps: IntervalSet::unbounded(),
        }
    }

    /// The y-coordinate every candidate of this sweep starts from.
    pub fn top_line(&self) -> f64 {
        self.anchor.y()
    }

    pub fn anchor(&self) -> &[Rectangle] {
        self.anchor.defects()
    }

    pub fn open_gaps(&self) -> &IntervalSet {
        &self.open_gaps
    }

    pub fn candidates(&self) -> &[Rectangle] {
        &self.candidates
    }

    /// No gap is left, so no later line can emit anything.
    pub fn is_exhausted(&self) -> bool {
        self.open_gaps.is_empty()
    }

    pub fn into_candidates(self) -> Vec<Rectangle> {
        self.candidates
    }

    /// Advances the sweep to `line`, the group of defects whose top edges
    /// lie on it.
    ///
    /// Only defects reaching below the ceiling close gaps; the rest leave the
    /// state untouched. Every gap a closing defect interrupts becomes a
    /// candidate spanning from the ceiling down to `line`. Gaps that no longer
    /// share a stretch with the anchor can never again produce a rectangle
    /// held up by it and are dropped.
    pub fn advance(&mut self, line: &LineGroup) {
        let top_line = self.top_line();
        let bot_line = line.y();

        let closing_span =
            IntervalSet::x_projection(line.defects().iter().filter(|d| top_line < d.bottom()));
        if closing_span.is_empty() {
            return;
        }

        if top_line < bot_line {
            let emitted = self
                .open_gaps
                .maximal_intervals()
                .filter(|gap| gap.is_finite() && !gap.is_degenerate())
                .filter(|gap| closing_span.overlaps_interior(gap))
                .map(|gap| {
                    Rectangle::from_edges_unchecked(gap.lower(), top_line, gap.upper(), bot_line)
                });
            self.candidates.extend(emitted);
        }

        let mut open_gaps = self.open_gaps.difference(&closing_span);
        open_gaps.retain(|gap| self.ceiling.overlaps_interior(gap));
        self.open_gaps = open_gaps;
        trace!("line y={bot_line}: open gaps {}", self.open_gaps);
    }
}
