//! Brute-force enumeration of maximal empty rectangles.
//!
//! Every rectangle whose edges come from defect or board edges is tried,
//! anything overlapping a defect is discarded, and only rectangles not
//! contained in another survivor are kept. This is far too slow for real
//! layouts and exists to cross-check the sweep.

use crate::geometry::Rectangle;

/// Returns every maximal empty rectangle of `board` avoiding `defects`.
///
/// Same contract as [`maximal_empty_rectangles`](crate::maximal_empty_rectangles),
/// in no particular order.
pub fn maximal_empty_rectangles_naive(board: &Rectangle, defects: &[Rectangle]) -> Vec<Rectangle> {
    let (x_min, x_max) = (board.left(), board.right());
    let (y_min, y_max) = (board.top(), board.bottom());

    // A rectangle's left edge rests against a defect's right edge, and so on.
    let lefts = candidate_edges(defects.iter().map(Rectangle::right), x_min, x_min, x_max);
    let rights = candidate_edges(defects.iter().map(Rectangle::left), x_max, x_min, x_max);
    let tops = candidate_edges(defects.iter().map(Rectangle::bottom), y_min, y_min, y_max);
    let bottoms = candidate_edges(defects.iter().map(Rectangle::top), y_max, y_min, y_max);

    let mut empty: Vec<Rectangle> = Vec::new();
    for &left in &lefts {
        for &right in rights.iter().filter(|&&r| left < r) {
            for &top in &tops {
                for &bottom in bottoms.iter().filter(|&&b| top < b) {
                    let candidate = Rectangle::from_edges_unchecked(left, top, right, bottom);
                    if !defects.iter().any(|d| d.overlaps_interior(&candidate)) {
                        empty.push(candidate);
                    }
                }
            }
        }
    }

    empty
        .iter()
        .filter(|r| !empty.iter().any(|q| q != *r && q.contains(r)))
        .copied()
        .collect()
}

/// Distinct values of `edges` inside `[lo, hi]`, plus the board edge.
fn candidate_edges<I>(edges: I, board_edge: f64, lo: f64, hi: f64) -> Vec<f64>
where
    I: Iterator<Item = f64>,
{
    let mut values: Vec<f64> = edges
        .filter(|&e| lo <= e && e <= hi)
        .chain(std::iter::once(board_edge))
        .collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}
