//! A canonical container for disjoint, sorted closed intervals.
//!
//! [`IntervalSet`] wraps a `Vec<Interval>` and guarantees the **canonical
//! invariant** at all times: intervals are sorted by lower bound and no two
//! intervals overlap or touch (touching intervals are merged).
//!
//! Read access is transparent via `Deref<Target = [Interval]>`; mutation goes
//! through methods that re-establish the invariant.

use std::fmt::Display;
use std::ops::Deref;

use super::closed::Interval;
use super::operations::{compute_difference, compute_union};
use crate::geometry::Rectangle;

/// A sorted union of pairwise-disjoint closed intervals over the extended
/// real line.
///
/// # Performance
///
/// - Construction from unsorted input: O(n log n) sort + O(n) merge.
/// - `union` / `difference`: O(n + m) linear merges over both operands.
/// - `overlaps` / `overlaps_interior` against one interval: O(log n).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntervalSet(Vec<Interval>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl IntervalSet {
    /// Creates an empty interval set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The set holding the whole extended real line `[-∞, +∞]`.
    pub fn unbounded() -> Self {
        Self(vec![Interval::unbounded()])
    }

    /// Union of the x-projections of `rectangles`.
    pub fn x_projection<'a, I>(rectangles: I) -> Self
    where
        I: IntoIterator<Item = &'a Rectangle>,
    {
        rectangles.into_iter().map(Rectangle::to_interval_x).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Internal helpers
// ─────────────────────────────────────────────────────────────────────

impl IntervalSet {
    /// Sorts by lower bound and merges overlapping / touching intervals.
    fn normalize(&mut self) {
        if self.0.len() <= 1 {
            return;
        }
        self.0.sort_by(|a, b| a.lower().total_cmp(&b.lower()));
        let mut merged: Vec<Interval> = Vec::with_capacity(self.0.len());
        for interval in self.0.drain(..) {
            super::operations::merge_into(&mut merged, interval);
        }
        self.0 = merged;
    }

    /// Index of the first interval whose upper bound is not below `position`.
    fn first_reaching(&self, position: f64) -> usize {
        self.0.partition_point(|iv| iv.upper() < position)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Pruning
// ─────────────────────────────────────────────────────────────────────

impl IntervalSet {
    /// Keeps only the intervals `f` accepts. Dropping intervals never breaks
    /// the canonical invariant.
    pub fn retain<F: FnMut(&Interval) -> bool>(&mut self, f: F) {
        self.0.retain(f);
    }
}

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl IntervalSet {
    /// Returns the union of `self` and `other`.
    pub fn union(&self, other: &IntervalSet) -> IntervalSet {
        Self(compute_union(&self.0, &other.0))
    }

    /// Returns the closure of `self` minus `other`.
    ///
    /// Every contained interval loses the parts covered by `other`; an
    /// interval straddling a removed range on both sides splits in two.
    pub fn difference(&self, other: &IntervalSet) -> IntervalSet {
        Self(compute_difference(&self.0, &other.0))
    }

    /// Returns the closure of `self` minus a single range.
    pub fn difference_interval(&self, range: Interval) -> IntervalSet {
        Self(compute_difference(&self.0, &[range]))
    }

    /// Returns true if some contained interval shares a point with `other`.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.0
            .get(self.first_reaching(other.lower()))
            .is_some_and(|iv| iv.overlaps(other))
    }

    /// Returns true if some contained interval shares a point with some
    /// interval of `other`.
    pub fn overlaps_set(&self, other: &IntervalSet) -> bool {
        other.iter().any(|iv| self.overlaps(iv))
    }

    /// Returns true if some contained interval shares a sub-interval of
    /// positive length with `other`.
    pub fn overlaps_interior(&self, other: &Interval) -> bool {
        self.0[self.first_reaching(other.lower())..]
            .iter()
            .take_while(|iv| iv.lower() < other.upper())
            .any(|iv| iv.overlaps_interior(other))
    }

    /// The maximal contiguous sub-intervals, in ascending order.
    pub fn maximal_intervals(&self) -> impl Iterator<Item = Interval> + '_ {
        self.0.iter().copied()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access
// ─────────────────────────────────────────────────────────────────────

impl Deref for IntervalSet {
    type Target = [Interval];

    fn deref(&self) -> &[Interval] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl From<Vec<Interval>> for IntervalSet {
    /// Creates an `IntervalSet` from an unsorted `Vec`, normalizing on construction.
    fn from(vec: Vec<Interval>) -> Self {
        let mut set = Self(vec);
        set.normalize();
        set
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Display for IntervalSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

/// Enables `assert_eq!(interval_set, vec![...])` in tests.
impl PartialEq<Vec<Interval>> for IntervalSet {
    fn eq(&self, other: &Vec<Interval>) -> bool {
        self.0 == *other
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for IntervalSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntervalSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = <Vec<Interval> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(vec))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────
