//! End-to-end tests for the sweep, checked against the brute-force oracle.

use super::*;
use crate::generate::{random_defects, random_grid_defects};
use crate::maximal_empty_rectangles;
use crate::naive::maximal_empty_rectangles_naive;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Helper to build rectangles concisely in tests.
fn rect(left: f64, top: f64, right: f64, bottom: f64) -> Rectangle {
    Rectangle::new(left, top, right, bottom).unwrap()
}

fn sorted(mut rects: Vec<Rectangle>) -> Vec<Rectangle> {
    sort_canonical(&mut rects);
    rects
}

/// Asserts the sweep and the oracle agree as sets on one layout.
fn assert_matches_oracle(board: &Rectangle, defects: &[Rectangle]) {
    let fast = maximal_empty_rectangles(board, defects);
    let slow = maximal_empty_rectangles_naive(board, defects);
    let fast_sorted = sorted(fast.clone());
    let mut dedup = fast_sorted.clone();
    dedup.dedup();
    assert_eq!(dedup, fast_sorted, "sweep emitted duplicates for {defects:?}");
    assert_eq!(
        fast_sorted,
        sorted(slow),
        "sweep and oracle disagree on board {board} with defects {defects:?}"
    );
}

#[cfg(test)]
mod basic_layouts {
    use super::*;

    #[test]
    fn test_no_defects_returns_board() {
        let board = rect(0.0, 0.0, 3.0, 2.0);
        assert_eq!(maximal_empty_rectangles(&board, &[]), vec![board]);
    }

    #[test]
    fn test_single_centered_defect() {
        let board = rect(0.0, 0.0, 2.0, 2.0);
        let mers = maximal_empty_rectangles(&board, &[rect(0.5, 0.5, 1.5, 1.5)]);
        assert_eq!(
            mers,
            vec![
                rect(0.0, 0.0, 2.0, 0.5),
                rect(0.0, 0.0, 0.5, 2.0),
                rect(1.5, 0.0, 2.0, 2.0),
                rect(0.0, 1.5, 2.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_touching_defects_leave_no_sliver() {
        let board = rect(0.0, 0.0, 4.0, 2.0);
        let defects = [rect(1.0, 0.0, 2.0, 1.0), rect(2.0, 0.0, 3.0, 1.0)];
        let mers = maximal_empty_rectangles(&board, &defects);
        assert_eq!(
            mers,
            vec![
                rect(0.0, 0.0, 1.0, 2.0),
                rect(3.0, 0.0, 4.0, 2.0),
                rect(0.0, 1.0, 4.0, 2.0),
            ]
        );
        assert!(mers.iter().all(|m| m.width() > 0.0));
    }

    #[test]
    fn test_corner_touching_defects() {
        let board = rect(0.0, 0.0, 4.0, 4.0);
        let defects = [rect(1.0, 1.0, 2.0, 2.0), rect(2.0, 2.0, 3.0, 3.0)];
        assert_eq!(
            maximal_empty_rectangles(&board, &defects),
            vec![
                rect(0.0, 0.0, 4.0, 1.0),
                rect(2.0, 0.0, 4.0, 2.0),
                rect(0.0, 0.0, 1.0, 4.0),
                rect(3.0, 0.0, 4.0, 4.0),
                rect(0.0, 2.0, 2.0, 4.0),
                rect(0.0, 3.0, 4.0, 4.0),
            ]
        );
    }

    #[test]
    fn test_two_staggered_defects_in_sweep_order() {
        let board = rect(0.0, 0.0, 10.0, 10.0);
        let defects = [rect(2.0, 3.0, 4.0, 5.0), rect(6.0, 1.0, 8.0, 7.0)];
        assert_eq!(
            maximal_empty_rectangles(&board, &defects),
            vec![
                rect(0.0, 0.0, 10.0, 1.0),
                rect(0.0, 0.0, 6.0, 3.0),
                rect(0.0, 0.0, 2.0, 10.0),
                rect(4.0, 0.0, 6.0, 10.0),
                rect(8.0, 0.0, 10.0, 10.0),
                rect(0.0, 5.0, 6.0, 10.0),
                rect(0.0, 7.0, 10.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_board_offset_from_origin() {
        let board = Rectangle::from_corner_and_size(-5.0, 10.0, 4.0, 2.0).unwrap();
        let defect = Rectangle::from_corner_and_size(-4.0, 10.5, 1.0, 1.0).unwrap();
        assert_matches_oracle(&board, &[defect]);
        assert_eq!(maximal_empty_rectangles(&board, &[defect]).len(), 4);
    }
}

#[cfg(test)]
mod degenerate_inputs {
    use super::*;

    #[test]
    fn test_zero_area_defects_obstruct_nothing() {
        let board = rect(0.0, 0.0, 2.0, 2.0);
        let defects = [rect(1.0, 0.0, 1.0, 2.0), rect(0.5, 0.5, 0.5, 0.5)];
        assert_eq!(maximal_empty_rectangles(&board, &defects), vec![board]);
        assert_matches_oracle(&board, &defects);
    }

    #[test]
    fn test_defect_covering_board() {
        let board = rect(0.0, 0.0, 2.0, 2.0);
        assert!(maximal_empty_rectangles(&board, &[rect(-1.0, -1.0, 3.0, 3.0)]).is_empty());
        assert!(maximal_empty_rectangles(&board, &[board]).is_empty());
    }

    #[test]
    fn test_defect_outside_board_is_ignored() {
        let board = rect(0.0, 0.0, 2.0, 2.0);
        assert_eq!(
            maximal_empty_rectangles(&board, &[rect(3.0, 3.0, 4.0, 4.0)]),
            vec![board]
        );
    }

    #[test]
    fn test_defect_spilling_over_board_edge() {
        let board = rect(0.0, 0.0, 2.0, 2.0);
        let defects = [rect(-1.0, -1.0, 1.0, 1.0)];
        assert_eq!(
            sorted(maximal_empty_rectangles(&board, &defects)),
            vec![rect(1.0, 0.0, 2.0, 2.0), rect(0.0, 1.0, 2.0, 2.0)]
        );
    }

    #[test]
    fn test_defects_flush_with_board_edges() {
        let board = rect(0.0, 0.0, 3.0, 3.0);
        let defects = [rect(0.0, 0.0, 1.0, 3.0), rect(2.0, 0.0, 3.0, 3.0)];
        assert_eq!(
            maximal_empty_rectangles(&board, &defects),
            vec![rect(1.0, 0.0, 2.0, 3.0)]
        );
    }

    #[test]
    fn test_zero_area_board_has_no_mers() {
        assert!(maximal_empty_rectangles(&rect(0.0, 0.0, 0.0, 3.0), &[]).is_empty());
        assert!(maximal_empty_rectangles(&rect(0.0, 1.0, 3.0, 1.0), &[]).is_empty());
    }

    #[test]
    fn test_duplicate_defects() {
        let board = rect(0.0, 0.0, 2.0, 2.0);
        let d = rect(0.5, 0.5, 1.5, 1.5);
        assert_eq!(
            maximal_empty_rectangles(&board, &[d, d, d]),
            maximal_empty_rectangles(&board, &[d])
        );
    }
}

#[cfg(test)]
mod oracle_equivalence {
    use super::*;

    #[test]
    fn test_random_unit_square_layouts() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let board = rect(0.0, 0.0, 1.0, 1.0);
        for _ in 0..300 {
            let count = rng.gen_range(0..=7);
            let defects = random_defects(&mut rng, &board, count).unwrap();
            assert_matches_oracle(&board, &defects);
        }
    }

    #[test]
    fn test_random_lattice_layouts() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = rect(0.0, 0.0, 6.0, 6.0);
        for _ in 0..500 {
            let count = rng.gen_range(0..=7);
            let cells = rng.gen_range(2..=6);
            let defects = random_grid_defects(&mut rng, &board, count, cells).unwrap();
            assert_matches_oracle(&board, &defects);
        }
    }

    #[test]
    fn test_random_layouts_spilling_past_board() {
        let mut rng = StdRng::seed_from_u64(1234);
        let board = rect(1.0, 1.0, 5.0, 5.0);
        let around = rect(0.0, 0.0, 6.0, 6.0);
        for _ in 0..300 {
            let count = rng.gen_range(0..=6);
            let defects = random_grid_defects(&mut rng, &around, count, 6).unwrap();
            assert_matches_oracle(&board, &defects);
        }
    }
}

#[cfg(test)]
mod properties {
    use super::*;

    fn random_layouts(seed: u64) -> impl Iterator<Item = (Rectangle, Vec<Rectangle>)> {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = rect(0.0, 0.0, 8.0, 8.0);
        (0..200).map(move |_| {
            let count = rng.gen_range(0..=8);
            (board, random_grid_defects(&mut rng, &board, count, 8).unwrap())
        })
    }

    #[test]
    fn test_every_mer_inside_board() {
        for (board, defects) in random_layouts(1) {
            for m in maximal_empty_rectangles(&board, &defects) {
                assert!(board.contains(&m), "{m} leaves board {board}");
                assert!(m.is_finite());
                assert!(m.has_interior());
            }
        }
    }

    #[test]
    fn test_no_mer_overlaps_a_defect() {
        for (board, defects) in random_layouts(2) {
            for m in maximal_empty_rectangles(&board, &defects) {
                assert!(
                    defects.iter().all(|d| !d.overlaps_interior(&m)),
                    "{m} overlaps a defect in {defects:?}"
                );
            }
        }
    }

    #[test]
    fn test_no_mer_contains_another() {
        for (board, defects) in random_layouts(3) {
            let mers = maximal_empty_rectangles(&board, &defects);
            for (i, a) in mers.iter().enumerate() {
                for (j, b) in mers.iter().enumerate() {
                    assert!(i == j || !a.contains(b), "{a} contains {b}");
                }
            }
        }
    }

    #[test]
    fn test_no_mer_can_grow() {
        // Nudging any edge outwards must hit a defect or leave the board.
        let eps = 1e-3;
        for (board, defects) in random_layouts(4) {
            for m in maximal_empty_rectangles(&board, &defects) {
                let grown = [
                    rect(m.left() - eps, m.top(), m.right(), m.bottom()),
                    rect(m.left(), m.top() - eps, m.right(), m.bottom()),
                    rect(m.left(), m.top(), m.right() + eps, m.bottom()),
                    rect(m.left(), m.top(), m.right(), m.bottom() + eps),
                ];
                for g in grown {
                    assert!(
                        !board.contains(&g) || defects.iter().any(|d| d.overlaps_interior(&g)),
                        "{m} can grow to {g}"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod finder_config {
    use super::*;

    fn layout() -> (Rectangle, Vec<Rectangle>) {
        (
            rect(0.0, 0.0, 10.0, 10.0),
            vec![rect(2.0, 3.0, 4.0, 5.0), rect(6.0, 1.0, 8.0, 7.0)],
        )
    }

    #[test]
    fn test_default_finder_matches_free_function() {
        let (board, defects) = layout();
        let finder = MerFinder::default();
        assert_eq!(*finder.config(), SweepConfig::default());
        assert_eq!(
            finder.find(&board, &defects),
            maximal_empty_rectangles(&board, &defects)
        );
    }

    #[test]
    fn test_min_size_filters_output() {
        let (board, defects) = layout();
        let finder = MerFinder::new(SweepConfig::default().with_min_size(3.0, 3.0));
        let mers = finder.find(&board, &defects);
        assert_eq!(
            mers,
            vec![
                rect(0.0, 0.0, 6.0, 3.0),
                rect(0.0, 5.0, 6.0, 10.0),
                rect(0.0, 7.0, 10.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_min_area_filters_output() {
        let (board, defects) = layout();
        let finder = MerFinder::new(SweepConfig::default().with_min_area(25.0));
        let mers = finder.find(&board, &defects);
        assert!(mers.iter().all(|m| m.area() >= 25.0));
        assert!(mers.contains(&rect(0.0, 7.0, 10.0, 10.0)));
        assert!(!mers.contains(&rect(0.0, 0.0, 10.0, 1.0)));
    }

    #[test]
    fn test_canonical_order() {
        let (board, defects) = layout();
        let finder = MerFinder::new(SweepConfig::default().with_canonical_order(true));
        let mers = finder.find(&board, &defects);
        assert_eq!(mers, sorted(maximal_empty_rectangles(&board, &defects)));
        assert_eq!(mers.first(), Some(&rect(0.0, 0.0, 10.0, 1.0)));
    }
}
