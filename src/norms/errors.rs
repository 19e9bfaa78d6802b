//! Error norm failures.
//!
//! ┌ [`NormError::Quadrature`]        : adaptive integration failed (Lp norms)
//! ├ [`NormError::InvalidResolution`] : fewer than two samples per interval
//! ├ [`NormError::InvalidExponent`]   : `p` not finite or below 1
//! └ [`NormError::NonFiniteError`]    : pointwise error NaN or infinite

use thiserror::Error;

use crate::quadrature::errors::QuadratureError;

#[derive(Debug, Error)]
pub enum NormError {
    #[error(transparent)]
    Quadrature(#[from] QuadratureError),

    #[error("invalid resolution: must be >= 2 samples per interval. got {got}")]
    InvalidResolution { got: usize },

    #[error("invalid exponent: p must be finite and >= 1. got p={got}")]
    InvalidExponent { got: f64 },

    #[error("pointwise error non-finite at x={x}: got {got}")]
    NonFiniteError { x: f64, got: f64 },
}
