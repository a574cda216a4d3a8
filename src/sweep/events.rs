//! Event index: defects grouped by the horizontal lines they start and end on.

use crate::geometry::Rectangle;

/// Defects sharing one horizontal edge coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGroup {
    y: f64,
    defects: Vec<Rectangle>,
}

impl LineGroup {
    /// The shared y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn defects(&self) -> &[Rectangle] {
        &self.defects
    }
}

/// Immutable, per-call index over the augmented defect list.
///
/// The augmented list is the user defects plus four half-infinite sentinels
/// covering everything left of, above, right of and below the board. Defects
/// without interior obstruct nothing and are left out.
#[derive(Debug, Clone)]
pub struct EventIndex {
    defects: Vec<Rectangle>,
    bottoms: Vec<LineGroup>,
    tops: Vec<LineGroup>,
}

impl EventIndex {
    pub fn new(board: &Rectangle, defects: &[Rectangle]) -> Self {
        let defects: Vec<Rectangle> = board_sentinels(board)
            .into_iter()
            .chain(defects.iter().copied())
            .filter(Rectangle::has_interior)
            .collect();

        let bottoms = group_by_line(&defects, Rectangle::bottom);
        let tops = group_by_line(&defects, Rectangle::top);

        Self {
            defects,
            bottoms,
            tops,
        }
    }

    /// Sentinels first, then the user defects that have an interior.
    pub fn defects(&self) -> &[Rectangle] {
        &self.defects
    }

    /// Groups keyed by bottom edge, ascending.
    pub fn bottoms(&self) -> &[LineGroup] {
        &self.bottoms
    }

    /// Groups keyed by top edge, ascending.
    pub fn tops(&self) -> &[LineGroup] {
        &self.tops
    }

    pub fn bottom_lines(&self) -> impl Iterator<Item = f64> + '_ {
        self.bottoms.iter().map(LineGroup::y)
    }

    pub fn top_lines(&self) -> impl Iterator<Item = f64> + '_ {
        self.tops.iter().map(LineGroup::y)
    }

    /// Defects whose bottom edge lies on `y`.
    pub fn defects_with_bottom(&self, y: f64) -> &[Rectangle] {
        lookup(&self.bottoms, y)
    }

    /// Defects whose top edge lies on `y`.
    pub fn defects_with_top(&self, y: f64) -> &[Rectangle] {
        lookup(&self.tops, y)
    }
}

/// The four half-infinite rectangles surrounding `board`.
fn board_sentinels(board: &Rectangle) -> [Rectangle; 4] {
    const INF: f64 = f64::INFINITY;
    [
        Rectangle::from_edges_unchecked(-INF, -INF, board.left(), INF),
        Rectangle::from_edges_unchecked(-INF, -INF, INF, board.top()),
        Rectangle::from_edges_unchecked(board.right(), -INF, INF, INF),
        Rectangle::from_edges_unchecked(-INF, board.bottom(), INF, INF),
    ]
}

/// Buckets `defects` by `key`, keeping insertion order inside each bucket.
fn group_by_line(defects: &[Rectangle], key: fn(&Rectangle) -> f64) -> Vec<LineGroup> {
    let mut sorted: Vec<Rectangle> = defects.to_vec();
    // Stable sort: defects on the same line keep their input order.
    sorted.sort_by(|a, b| key(a).total_cmp(&key(b)));

    let mut groups: Vec<LineGroup> = Vec::new();
    for defect in sorted {
        match groups.last_mut() {
            Some(group) if group.y == key(&defect) => group.defects.push(defect),
            _ => groups.push(LineGroup {
                y: key(&defect),
                defects: vec![defect],
            }),
        }
    }
    groups
}

fn lookup(groups: &[LineGroup], y: f64) -> &[Rectangle] {
    let idx = groups.partition_point(|g| g.y < y);
    groups
        .get(idx)
        .filter(|group| group.y == y)
        .map(|group| group.defects.as_slice())
        .unwrap_or(&[])
}
