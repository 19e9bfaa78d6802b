//! Midpoint Approximation
//!
//! Piecewise constant approximation sampling the target once per
//! sub-interval, at `x_i = a_i + beta * (b_i - a_i)`. `beta = 0.5` gives the
//! midpoint rule; `beta = 0` and `beta = 1` the left and right endpoints.


use crate::approximation::algorithms::Algorithm;
use crate::approximation::dof::{sample_target, DofLayout};
use crate::approximation::errors::ApproximationError;
use crate::approximation::traits::LocalScheme;
use crate::partition::Partition;


/// Midpoint scheme
///
/// # Defaults
/// └ DEFAULT_BETA - 0.5
///
/// # Validation
/// └ `beta` finite and in `[0, 1]`, checked by [`Midpoint::with_beta`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Midpoint {
    beta: f64,
}
impl Midpoint {
    pub const DEFAULT_BETA: f64 = 0.5;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// # Errors
    /// [`ApproximationError::InvalidBeta`] if `beta` is not in `[0, 1]`.
    pub fn with_beta(beta: f64) -> Result<Self, ApproximationError> {
        if !(0.0..=1.0).contains(&beta) {
            return Err(ApproximationError::InvalidBeta { got: beta });
        }
        Ok(Self { beta })
    }

    #[inline] #[must_use] pub fn beta(&self) -> f64 { self.beta }
}

impl Default for Midpoint {
    fn default() -> Self {
        Self { beta: Self::DEFAULT_BETA }
    }
}

impl LocalScheme for Midpoint {
    fn algorithm(&self) -> Algorithm { Algorithm::Midpoint }
    fn continuous(&self) -> bool { false }

    fn build_dof(
        &self,
        partition: &Partition,
        target: &dyn Fn(f64) -> f64,
    ) -> Result<DofLayout, ApproximationError> {
        let dof = partition
            .intervals()
            .map(|(a, b)| sample_target(target, a + self.beta * (b - a)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DofLayout::per_interval(dof))
    }

    #[inline]
    fn evaluate_on_interval(&self, _x: f64, dofs: &[f64], _bounds: (f64, f64)) -> f64 {
        dofs[0]
    }
}
