//! Composite Trapezoidal Rule
//!
//! Implements the [trapezoidal rule](https://en.wikipedia.org/wiki/Trapezoidal_rule)
//! over sampled data. Deterministic; there is no convergence failure mode.


use crate::quadrature::errors::QuadratureError;


/// Integrates samples `ys` taken at abscissae `xs`.
///
/// ```text
/// I = sum_i (xs[i+1] - xs[i]) * (ys[i] + ys[i+1]) / 2
/// ```
///
/// `xs` is expected in ascending order; it is not checked.
///
/// # Errors
/// ┌ [`QuadratureError::UnequalLength`]      - `xs.len() != ys.len()`
/// └ [`QuadratureError::InsufficientPoints`] - fewer than two samples
pub fn trapezoid(xs: &[f64], ys: &[f64]) -> Result<f64, QuadratureError> {
    if xs.len() != ys.len() {
        return Err(QuadratureError::UnequalLength { x_len: xs.len(), y_len: ys.len() });
    }
    if xs.len() < 2 {
        return Err(QuadratureError::InsufficientPoints { got: xs.len() });
    }

    Ok(xs
        .windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| 0.5 * (x[1] - x[0]) * (y[0] + y[1]))
        .sum())
}
