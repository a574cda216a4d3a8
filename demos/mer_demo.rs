//! Demonstration of the maximal empty rectangle search on a small panel.

use mer::generate::random_grid_defects;
use mer::{maximal_empty_rectangles, maximal_empty_rectangles_naive, sort_canonical};
use mer::{MerFinder, Rectangle, ShapeError, SweepConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), ShapeError> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .ok();

    // A 2 × 2 panel with one defect in the middle.
    let board = Rectangle::new(0.0, 0.0, 2.0, 2.0)?;
    let defects = vec![Rectangle::from_corner_and_size(0.5, 0.5, 1.0, 1.0)?];

    println!("Board: {}", board);
    for d in &defects {
        println!("Defect: {}", d);
    }
    println!("\nMaximal empty rectangles (sweep order):");
    for mer in maximal_empty_rectangles(&board, &defects) {
        let (w, h) = mer.size();
        println!("  {}  size {:.2} x {:.2}", mer, w, h);
    }

    // A random lattice layout, filtered to usable pieces.
    let mut rng = StdRng::seed_from_u64(2024);
    let panel = Rectangle::new(0.0, 0.0, 100.0, 60.0)?;
    let defects = random_grid_defects(&mut rng, &panel, 6, 10)?;

    let finder = MerFinder::new(
        SweepConfig::default()
            .with_min_size(20.0, 12.0)
            .with_canonical_order(true),
    );
    let usable = finder.find(&panel, &defects);
    println!("\nPanel {} with {} defects:", panel, defects.len());
    for mer in &usable {
        println!("  {}  area {:.1}", mer, mer.area());
    }

    // Cross-check against the brute-force enumeration.
    let mut fast = maximal_empty_rectangles(&panel, &defects);
    let mut slow = maximal_empty_rectangles_naive(&panel, &defects);
    sort_canonical(&mut fast);
    sort_canonical(&mut slow);
    println!(
        "\nSweep found {} MERs, brute force found {} (agree: {})",
        fast.len(),
        slow.len(),
        fast == slow
    );

    Ok(())
}
