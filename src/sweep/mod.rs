//! Sweep-line search for maximal empty rectangles.
//!
//! The board is turned into four half-infinite sentinel defects so that its
//! edges behave like any other obstacle. Then, for every distinct bottom line
//! among the defects (an *anchor*), the sweep walks the distinct top lines in
//! ascending order:
//!
//! 1. **Gaps**: an [`IntervalSet`](crate::interval::IntervalSet) of x-ranges
//!    still unobstructed between the anchor line and the current line. It
//!    starts as the whole real line.
//! 2. **Closing**: defects starting on the current line and reaching below
//!    the anchor interrupt every gap they share a stretch with. Each such gap
//!    yields a candidate reaching from the anchor line down to this line.
//! 3. **Pruning**: gaps that no longer share a stretch with the anchor's
//!    x-extent are dropped, since nothing can rest against the anchor there.
//!
//! Sweeps are independent of each other and only read the shared
//! [`EventIndex`], which is what the `parallel` feature exploits.
//!
//! # Module Structure
//!
//! - [`events`] - augmented defect list grouped by top and bottom lines
//! - [`state`] - per-anchor sweep state and its step function
//! - [`engine`] - the sweep loops
//! - [`config`] - output filtering and ordering

mod config;
pub mod engine;
pub mod events;
pub mod state;

#[cfg(test)]
mod tests;

use log::debug;

use crate::geometry::{sort_canonical, Rectangle};

pub use config::SweepConfig;
pub use events::{EventIndex, LineGroup};
pub use state::SweepState;

/// Maximal empty rectangle search with a fixed [`SweepConfig`].
#[derive(Debug, Clone, Default)]
pub struct MerFinder {
    config: SweepConfig,
}

impl MerFinder {
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Returns every maximal empty rectangle of `board` avoiding `defects`.
    ///
    /// Defects may extend past the board or lie entirely outside it; the
    /// result is always clipped to the board. Defects without interior
    /// obstruct nothing.
    pub fn find(&self, board: &Rectangle, defects: &[Rectangle]) -> Vec<Rectangle> {
        let index = EventIndex::new(board, defects);
        debug!(
            "sweeping {} defects ({} with interior): {} anchor lines, {} event lines",
            defects.len(),
            defects.iter().filter(|d| d.has_interior()).count(),
            index.bottoms().len(),
            index.tops().len()
        );

        let mut mers = engine::sweep_all(&index);
        mers.retain(|r| r.is_finite() && self.config.accepts(r));
        if self.config.canonical_order {
            sort_canonical(&mut mers);
        }

        debug!("found {} maximal empty rectangles", mers.len());
        mers
    }
}
