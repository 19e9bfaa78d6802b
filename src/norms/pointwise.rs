//! Pointwise error shared by the sampling norms.

use crate::approximation::Approximation;
use crate::norms::errors::NormError;

/// `|target(x) - u_i(x)|` with `u_i` the local model of sub-interval `i`.
#[inline]
pub(crate) fn abs_error<A>(approx: &A, interval: usize, x: f64) -> Result<f64, NormError>
where A: Approximation + ?Sized {
    let err = (approx.target(x) - approx.evaluate_in_interval(interval, x)).abs();
    if err.is_finite() {
        Ok(err)
    } else {
        Err(NormError::NonFiniteError { x, got: err })
    }
}
