//! Configuration for adaptive quadrature.
//!
//! [`QuadCfg`]
//! ├ `abs_tol`          : absolute error target
//! ├ `rel_tol`          : relative error target
//! └ `max_subdivisions` : panel cap per piece, the only guard against non-termination
//!
//! A run converges once the summed error estimate is below
//! `max(abs_tol, rel_tol * |integral|)`.


use crate::quadrature::errors::QuadratureError;


/// Adaptive quadrature configuration
///
/// # Defaults
/// Unset fields read as the constants below.
///
/// ┌ DEFAULT_ABS_TOL          - 1.49e-8
/// ├ DEFAULT_REL_TOL          - 1.49e-8
/// └ DEFAULT_MAX_SUBDIVISIONS - 50
///
/// # Validation:
/// └ Performed by [`crate::quadrature::adaptive::integrate`] via [`QuadCfg::validate()`].
///    ├ `abs_tol` >= 0 and finite
///    ├ `rel_tol` >= 0 and finite
///    ├ Either `abs_tol` or `rel_tol` must be > 0
///    └ `max_subdivisions` >= 1
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct QuadCfg {
    abs_tol:          Option<f64>,
    rel_tol:          Option<f64>,
    max_subdivisions: Option<usize>,
}
impl QuadCfg {
    pub const DEFAULT_ABS_TOL:          f64   = 1.49e-8;
    pub const DEFAULT_REL_TOL:          f64   = 1.49e-8;
    pub const DEFAULT_MAX_SUBDIVISIONS: usize = 50;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_abs_tol(mut self, v: f64) -> Self { self.abs_tol = Some(v); self }
    pub fn with_rel_tol(mut self, v: f64) -> Self { self.rel_tol = Some(v); self }
    pub fn with_max_subdivisions(mut self, v: usize) -> Self { self.max_subdivisions = Some(v); self }

    #[inline] #[must_use] pub fn abs_tol(&self) -> f64 { self.abs_tol.unwrap_or(Self::DEFAULT_ABS_TOL) }
    #[inline] #[must_use] pub fn rel_tol(&self) -> f64 { self.rel_tol.unwrap_or(Self::DEFAULT_REL_TOL) }
    #[inline] #[must_use] pub fn max_subdivisions(&self) -> usize {
        self.max_subdivisions.unwrap_or(Self::DEFAULT_MAX_SUBDIVISIONS)
    }

    pub fn validate(&self) -> Result<QuadCfg, QuadratureError> {
        let abs_tol = self.abs_tol();
        let rel_tol = self.rel_tol();
        let max_subdivisions = self.max_subdivisions();

        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(QuadratureError::InvalidAbsTol { got: abs_tol });
        }
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(QuadratureError::InvalidRelTol { got: rel_tol });
        }
        if abs_tol == 0.0 && rel_tol == 0.0 {
            return Err(QuadratureError::InvalidAbsRelTol { abs_tol, rel_tol });
        }
        if max_subdivisions == 0 {
            return Err(QuadratureError::InvalidMaxSubdivisions { got: max_subdivisions });
        }

        Ok(Self {
            abs_tol:          Some(abs_tol),
            rel_tol:          Some(rel_tol),
            max_subdivisions: Some(max_subdivisions),
        })
    }
}
