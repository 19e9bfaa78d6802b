//! Partition construction errors.
//!
//! ┌ wrong number of nodes or sub-intervals
//! ├ non-finite nodes or bounds
//! └ nodes not strictly increasing

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("invalid number of sub-intervals: must be >= 1. got n={got}")]
    NoIntervals { got: usize },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("non-finite node at index {idx}")]
    NonFinite { idx: usize },

    #[error("nodes must be strictly increasing: points[{idx}]={got} does not exceed {prev}")]
    NonIncreasing { idx: usize, prev: f64, got: f64 },
}
