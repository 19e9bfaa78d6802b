//! Maximum (L-infinity) Error Norm
//!
//! Estimates `max |f - u|` from samples. Two modes:
//!
//! - sampled (default): `resolution` equally spaced points per sub-interval,
//!   `O(N * resolution)` evaluations.
//! - monotone shortcut: both endpoints of each sub-interval only, `O(N)`.
//!   Exact only if the maximum of `|f - u|` on every sub-interval sits at an
//!   endpoint, which holds whenever `f - u` is monotone there, e.g. any
//!   constant scheme on a monotone target. The precondition is the caller's
//!   and is not checked.
//!
//! Both modes evaluate a sub-interval's samples with its own local model, so
//! the right end of a discontinuous approximant sees the left limit of the
//! jump.


use crate::approximation::Approximation;
use crate::norms::config::NormCfg;
use crate::norms::errors::NormError;
use crate::norms::pointwise::abs_error;
use crate::partition::spacing::linspace;


/// Maximum absolute error over all samples of all sub-intervals.
///
/// # Errors
/// ┌ [`NormError::InvalidResolution`] - `cfg.resolution() < 2`
/// └ [`NormError::NonFiniteError`]    - target or approximant not finite at a sample
pub fn max_norm<A>(approx: &A, cfg: &NormCfg) -> Result<f64, NormError>
where A: Approximation + ?Sized {
    let cfg = cfg.validate()?;
    let resolution = if cfg.monotone_shortcut() { 2 } else { cfg.resolution() };

    let mut highest = 0.0_f64;
    for (i, (a, b)) in approx.partition().intervals().enumerate() {
        for x in linspace(a, b, resolution) {
            highest = highest.max(abs_error(approx, i, x)?);
        }
    }

    Ok(highest)
}
