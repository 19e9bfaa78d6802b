//! Lp Error Norms
//!
//! ```text
//! ||f - u||_p = ( sum_i integral_{a_i}^{b_i} |f(x) - u_i(x)|^p dx )^(1/p)
//! ```
//!
//! One adaptive Gauss-Kronrod run covers the whole partition. Its panels
//! start as the sub-intervals and each is integrated against its own local
//! model `u_i`, so jumps of discontinuous approximants sit on panel
//! boundaries instead of inside a panel. The tolerance bounds the total,
//! not each sub-interval.


use crate::approximation::Approximation;
use crate::norms::config::NormCfg;
use crate::norms::errors::NormError;
use crate::quadrature::adaptive::integrate_piecewise;


/// L1 norm of the error, see [`lp_norm`].
pub fn l1_norm<A>(approx: &A, cfg: &NormCfg) -> Result<f64, NormError>
where A: Approximation + ?Sized {
    lp_norm(approx, 1.0, cfg)
}

/// L2 norm of the error, see [`lp_norm`].
pub fn l2_norm<A>(approx: &A, cfg: &NormCfg) -> Result<f64, NormError>
where A: Approximation + ?Sized {
    lp_norm(approx, 2.0, cfg)
}

/// Lp norm of `target - approx` over the whole partition.
///
/// # Arguments
/// ┌ `approx` - any [`Approximation`]
/// ├ `p`      - exponent, finite and >= 1
/// └ `cfg`    - only `cfg.quad()` is used
///
/// # Errors
/// ┌ [`NormError::InvalidExponent`] - `p` not finite or `p < 1`
/// └ [`NormError::Quadrature`]      - invalid `cfg.quad()`, no convergence,
///                                    or a non-finite integrand value
pub fn lp_norm<A>(approx: &A, p: f64, cfg: &NormCfg) -> Result<f64, NormError>
where A: Approximation + ?Sized {
    if !p.is_finite() || p < 1.0 {
        return Err(NormError::InvalidExponent { got: p });
    }

    let integrand = |i: usize, x: f64| {
        (approx.target(x) - approx.evaluate_in_interval(i, x)).abs().powf(p)
    };
    let report = integrate_piecewise(integrand, approx.partition().points(), cfg.quad())?;

    Ok(report.integral.powf(p.recip()))
}
