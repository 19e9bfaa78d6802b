//! Quadrature error types.
//!
//! [`QuadratureError`]
//! ├ invalid input: bounds, tolerances, subdivision cap, sample vectors
//! ├ non-finite integrand value
//! └ no convergence within the subdivision cap

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuadratureError {
    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid `abs_tol`: must be finite and >= 0. got {got}")]
    InvalidAbsTol { got: f64 },

    #[error("invalid `rel_tol`: must be finite and >= 0. got {got}")]
    InvalidRelTol { got: f64 },

    #[error("either `abs_tol` or `rel_tol` must be > 0. got {abs_tol} and {rel_tol}")]
    InvalidAbsRelTol { abs_tol: f64, rel_tol: f64 },

    #[error("invalid max_subdivisions: must be >= 1. got max_subdivisions={got}")]
    InvalidMaxSubdivisions { got: usize },

    #[error("integrand non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error(
        "quadrature did not converge after {subdivisions} subdivisions: \
         estimate={estimate}, error estimate={error}"
    )]
    NotConverged { estimate: f64, error: f64, subdivisions: usize },

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },
}
