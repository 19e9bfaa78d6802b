use thiserror::Error;

use crate::quadrature::errors::QuadratureError;

#[derive(Debug, Error)]
pub enum ApproximationError {
    #[error(transparent)]
    Quadrature(#[from] QuadratureError),

    #[error("invalid beta: must lie in [0, 1]. got beta={got}")]
    InvalidBeta { got: f64 },

    #[error("target non-finite at x={x}, f(x)={fx}")]
    NonFiniteTarget { x: f64, fx: f64 },

    #[error("dof layout covers {got} intervals, partition has {expected}")]
    LayoutIntervalMismatch { got: usize, expected: usize },

    #[error("dof range {start}..{end} of interval {interval} is empty or exceeds {ndof} dofs")]
    LayoutRangeInvalid { interval: usize, start: usize, end: usize, ndof: usize },

    #[error("invalid sample count: must be >= 2 per interval. got {got}")]
    InvalidSampleCount { got: usize },
}
