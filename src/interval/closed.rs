//! Closed interval with possibly infinite bounds.

use std::fmt::Display;

/// Closed range `[lower, upper]` on the extended real line.
///
/// Either bound may be `-∞` or `+∞`; infinite bounds compare the usual way
/// (`-∞ < finite < +∞`). A single point `[x, x]` is a valid interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// Creates interval `[lower, upper]`.
    ///
    /// # Panics
    ///
    /// Panics if either bound is NaN or if `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> Self {
        assert!(
            lower <= upper,
            "Interval lower bound must be <= upper bound (got [{lower}, {upper}])"
        );
        Self { lower, upper }
    }

    /// Checked form of [`Interval::new`].
    pub fn try_new(lower: f64, upper: f64) -> Option<Self> {
        (lower <= upper).then_some(Self { lower, upper })
    }

    /// The whole extended real line `[-∞, +∞]`.
    pub const fn unbounded() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }

    pub const fn lower(&self) -> f64 {
        self.lower
    }

    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns true for a single point `[x, x]`.
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }

    /// Returns true if both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    /// Checks if the two closed intervals share at least one point.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Checks if the two intervals share a sub-interval of positive length.
    ///
    /// Intervals touching at a single point, and degenerate intervals, never
    /// overlap in this sense.
    pub fn overlaps_interior(&self, other: &Interval) -> bool {
        self.lower.max(other.lower) < self.upper.min(other.upper)
    }

    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        if self.overlaps(other) {
            Some(Interval::new(
                self.lower.max(other.lower),
                self.upper.min(other.upper),
            ))
        } else {
            None
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.lower, self.upper)
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 2)?;
        s.serialize_field("lower", &self.lower)?;
        s.serialize_field("upper", &self.upper)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            lower: f64,
            upper: f64,
        }

        let raw = <Raw as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_new(raw.lower, raw.upper)
            .ok_or_else(|| serde::de::Error::custom("interval lower bound exceeds upper bound"))
    }
}
