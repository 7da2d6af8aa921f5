//! Error types for meshchart

use crate::point::Axis;
use thiserror::Error;

/// Main error type for meshchart operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The point set handed to the normalizer was empty
    #[error("point set is empty")]
    EmptyInput,

    /// Every point shares the same coordinate on `axis`, so it cannot be rescaled
    #[error("data has zero span along the {axis} axis")]
    DegenerateExtent { axis: Axis },

    /// A zero-area triangle reached the height interpolator
    #[error("triangle has zero area in the projected plane")]
    DegenerateTriangle,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Algorithm error: {0}")]
    Algorithm(String),

    #[error("Image error: {0}")]
    Image(String),
}

/// Result type alias for meshchart operations
pub type Result<T> = std::result::Result<T, Error>;
