//! mer - Maximal Empty Rectangles
//!
//! Finds every axis-aligned rectangle inside a board that overlaps none of a
//! set of rectangular defects and cannot be grown in any direction. Useful
//! for panel layout, nesting and cutting-stock placement.
//!
//! ```rust
//! use mer::{maximal_empty_rectangles, Rectangle};
//!
//! let board = Rectangle::new(0.0, 0.0, 2.0, 2.0).unwrap();
//! let defect = Rectangle::new(0.5, 0.5, 1.5, 1.5).unwrap();
//!
//! let mers = maximal_empty_rectangles(&board, &[defect]);
//! assert_eq!(mers.len(), 4);
//! assert!(mers.contains(&Rectangle::new(0.0, 0.0, 0.5, 2.0).unwrap()));
//! ```

pub mod generate;
pub mod geometry;
pub mod interval;
pub mod naive;
pub mod sweep;

pub use geometry::{sort_canonical, Rectangle, ShapeError};
pub use interval::{Interval, IntervalSet};
pub use naive::maximal_empty_rectangles_naive;
pub use sweep::{MerFinder, SweepConfig};

/// Returns every maximal empty rectangle of `board` avoiding `defects`.
///
/// Rectangles come out in sweep order: grouped by ascending top edge, and by
/// ascending bottom edge within a group. Use [`sort_canonical`] or
/// [`SweepConfig::canonical_order`] when a stable order matters.
pub fn maximal_empty_rectangles(board: &Rectangle, defects: &[Rectangle]) -> Vec<Rectangle> {
    MerFinder::default().find(board, defects)
}
