use thiserror::Error;

/// Errors raised when constructing a [`Rectangle`](super::Rectangle).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ShapeError {
    #[error("left edge {left} lies to the right of right edge {right}")]
    InvertedX { left: f64, right: f64 },

    #[error("top edge {top} lies below bottom edge {bottom}")]
    InvertedY { top: f64, bottom: f64 },

    #[error("rectangle coordinates cannot be NaN")]
    NaNCoordinate,
}
