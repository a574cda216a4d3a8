//! Random defect layouts for tests and demos.

use rand::Rng;

use crate::geometry::{Rectangle, ShapeError};

/// Draws `count` defects uniformly inside `board`.
///
/// Each edge pair is drawn independently and ordered, so defects may be thin.
///
/// # Errors
///
/// Returns [`ShapeError::NaNCoordinate`] if `board` is not finite, since
/// uniform draws over an infinite range have no meaningful value.
pub fn random_defects<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Rectangle,
    count: usize,
) -> Result<Vec<Rectangle>, ShapeError> {
    (0..count)
        .map(|_| {
            let (left, right) = ordered_pair(rng, board.left(), board.right());
            let (top, bottom) = ordered_pair(rng, board.top(), board.bottom());
            Rectangle::new(left, top, right, bottom)
        })
        .collect()
}

/// Draws `count` defects whose edges snap to a `cells × cells` lattice over
/// `board`.
///
/// Snapping makes shared edges, touching defects and zero-area defects
/// common, which is where maximality bugs hide.
///
/// # Errors
///
/// Returns [`ShapeError::NaNCoordinate`] if `board` is not finite.
pub fn random_grid_defects<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Rectangle,
    count: usize,
    cells: u32,
) -> Result<Vec<Rectangle>, ShapeError> {
    let cells = cells.max(1);
    let snap = |lo: f64, hi: f64, i: u32| lo + (hi - lo) * f64::from(i) / f64::from(cells);
    (0..count)
        .map(|_| {
            let (i0, i1) = ordered(rng.gen_range(0..=cells), rng.gen_range(0..=cells));
            let (j0, j1) = ordered(rng.gen_range(0..=cells), rng.gen_range(0..=cells));
            Rectangle::new(
                snap(board.left(), board.right(), i0),
                snap(board.top(), board.bottom(), j0),
                snap(board.left(), board.right(), i1),
                snap(board.top(), board.bottom(), j1),
            )
        })
        .collect()
}

fn ordered_pair<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> (f64, f64) {
    let a = lo + (hi - lo) * rng.gen::<f64>();
    let b = lo + (hi - lo) * rng.gen::<f64>();
    (a.min(b), a.max(b))
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
