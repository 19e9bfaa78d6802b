//! Trapezoidal L2 Error Norm
//!
//! Samples the squared error at `resolution` equally spaced points per
//! sub-interval, integrates each with the trapezoid rule and returns the
//! square root of the sum. Deterministic, unlike [`crate::norms::l2_norm`].


use crate::approximation::Approximation;
use crate::norms::config::NormCfg;
use crate::norms::errors::NormError;
use crate::norms::pointwise::abs_error;
use crate::partition::spacing::linspace;
use crate::quadrature::trapezoid::trapezoid;


/// Trapezoidal approximation of the L2 error norm.
///
/// # Errors
/// ┌ [`NormError::InvalidResolution`] - `cfg.resolution() < 2`
/// └ [`NormError::NonFiniteError`]    - target or approximant not finite at a sample
pub fn l2_trapezoidal_norm<A>(approx: &A, cfg: &NormCfg) -> Result<f64, NormError>
where A: Approximation + ?Sized {
    let cfg = cfg.validate()?;
    let resolution = cfg.resolution();

    let mut total = 0.0;
    for (i, (a, b)) in approx.partition().intervals().enumerate() {
        let xs = linspace(a, b, resolution);
        let ys = xs
            .iter()
            .map(|&x| abs_error(approx, i, x).map(|e| e * e))
            .collect::<Result<Vec<_>, _>>()?;
        total += trapezoid(&xs, &ys)?;
    }

    Ok(total.sqrt())
}
