//! Axis-aligned geometry shared by the sweep and the oracle.

mod error;
mod rectangle;

pub use error::ShapeError;
pub use rectangle::{sort_canonical, Rectangle};
