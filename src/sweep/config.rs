//! Configuration for [`MerFinder`](super::MerFinder).

use crate::geometry::Rectangle;

/// Output filtering and ordering for a maximal-empty-rectangle search.
///
/// The defaults keep every maximal rectangle in sweep order. The size
/// thresholds are inclusive lower bounds applied after the sweep, so raising
/// them never changes which rectangles are maximal, only which are reported.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    // --- Size thresholds ---
    /// Smallest reported width.
    pub min_width: f64,
    /// Smallest reported height.
    pub min_height: f64,
    /// Smallest reported area.
    pub min_area: f64,

    // --- Ordering ---
    /// Sort the output by `(top, left, bottom, right)` instead of sweep order.
    pub canonical_order: bool,
}

impl SweepConfig {
    /// Returns true if `rect` passes every size threshold.
    pub fn accepts(&self, rect: &Rectangle) -> bool {
        rect.width() >= self.min_width
            && rect.height() >= self.min_height
            && rect.area() >= self.min_area
    }

    pub fn with_min_size(mut self, width: f64, height: f64) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    pub fn with_min_area(mut self, area: f64) -> Self {
        self.min_area = area;
        self
    }

    pub fn with_canonical_order(mut self, canonical_order: bool) -> Self {
        self.canonical_order = canonical_order;
        self
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            min_area: 0.0,
            canonical_order: false,
        }
    }
}
