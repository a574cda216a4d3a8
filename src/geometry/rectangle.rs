//! Immutable axis-aligned rectangle value type.
//!
//! Coordinates follow screen conventions: `x` grows to the right and `y`
//! grows downward, so `top <= bottom`. Any coordinate may be infinite, which
//! is how the sweep models the region outside the board.

use std::cmp::Ordering;
use std::fmt::Display;

use super::error::ShapeError;
use crate::interval::Interval;

/// Axis-aligned box `[left, right] × [top, bottom]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Rectangle {
    /// Creates a rectangle from its four edges.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if any coordinate is NaN, if `left > right`, or
    /// if `top > bottom`. Degenerate (zero-width or zero-height) rectangles
    /// are accepted.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Result<Self, ShapeError> {
        if left.is_nan() || top.is_nan() || right.is_nan() || bottom.is_nan() {
            return Err(ShapeError::NaNCoordinate);
        }
        if left > right {
            return Err(ShapeError::InvertedX { left, right });
        }
        if top > bottom {
            return Err(ShapeError::InvertedY { top, bottom });
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Creates a rectangle from its top-left corner and its size.
    ///
    /// Negative sizes produce inverted edges and are rejected the same way
    /// [`Rectangle::new`] rejects them.
    pub fn from_corner_and_size(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, ShapeError> {
        Self::new(x, y, x + width, y + height)
    }

    /// Builds a rectangle whose edges are already known to be ordered.
    pub(crate) fn from_edges_unchecked(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        debug_assert!(left <= right && top <= bottom, "inverted rectangle edges");
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn left(&self) -> f64 {
        self.left
    }

    pub const fn top(&self) -> f64 {
        self.top
    }

    pub const fn right(&self) -> f64 {
        self.right
    }

    pub const fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Returns the `(x, y)` center point.
    pub fn center(&self) -> (f64, f64) {
        ((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// Returns `(width, height)`.
    pub fn size(&self) -> (f64, f64) {
        (self.width(), self.height())
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns true if the rectangle encloses a region of positive area.
    pub fn has_interior(&self) -> bool {
        self.left < self.right && self.top < self.bottom
    }

    /// Closed projection `[left, right]` onto the x axis.
    pub fn to_interval_x(&self) -> Interval {
        Interval::new(self.left, self.right)
    }

    /// Closed projection `[top, bottom]` onto the y axis.
    pub fn to_interval_y(&self) -> Interval {
        Interval::new(self.top, self.bottom)
    }

    /// Returns true if none of the four edges is infinite.
    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }

    /// Returns true if `other` lies inside `self` (edges may coincide).
    pub fn contains(&self, other: &Rectangle) -> bool {
        self.left <= other.left
            && other.right <= self.right
            && self.top <= other.top
            && other.bottom <= self.bottom
    }

    /// Returns true if the interiors of the two rectangles intersect.
    ///
    /// Rectangles that only share an edge or a corner do not overlap, and a
    /// rectangle without interior overlaps nothing.
    pub fn overlaps_interior(&self, other: &Rectangle) -> bool {
        self.to_interval_x().overlaps_interior(&other.to_interval_x())
            && self.to_interval_y().overlaps_interior(&other.to_interval_y())
    }

    /// Returns the closed intersection of two rectangles, if any.
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        let x = self.to_interval_x().intersection(&other.to_interval_x())?;
        let y = self.to_interval_y().intersection(&other.to_interval_y())?;
        Some(Self::from_edges_unchecked(x.lower(), y.lower(), x.upper(), y.upper()))
    }

    /// Total order on `(top, left, bottom, right)`.
    pub fn canonical_cmp(&self, other: &Rectangle) -> Ordering {
        self.top
            .total_cmp(&other.top)
            .then(self.left.total_cmp(&other.left))
            .then(self.bottom.total_cmp(&other.bottom))
            .then(self.right.total_cmp(&other.right))
    }
}

/// Sorts rectangles top-to-bottom, then left-to-right.
pub fn sort_canonical(rectangles: &mut [Rectangle]) {
    rectangles.sort_by(Rectangle::canonical_cmp);
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rectangle(left={}, top={}, right={}, bottom={})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

// =============================================================================
// Rectangle Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Rectangle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Rectangle", 4)?;
        s.serialize_field("left", &self.left)?;
        s.serialize_field("top", &self.top)?;
        s.serialize_field("right", &self.right)?;
        s.serialize_field("bottom", &self.bottom)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rectangle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            left: f64,
            top: f64,
            right: f64,
            bottom: f64,
        }

        let raw = <Raw as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(raw.left, raw.top, raw.right, raw.bottom).map_err(serde::de::Error::custom)
    }
}
