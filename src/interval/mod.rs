//! Closed intervals over the extended real line and their canonical unions.
//!
//! The sweep keeps its open gaps as an [`IntervalSet`]; set algebra lives in
//! [`operations`] and works directly on canonical slices.

mod closed;
mod interval_set;
pub mod operations;

pub use closed::Interval;
pub use interval_set::IntervalSet;
