//! Cell-Average (L2-constant) Approximation
//!
//! Piecewise constant approximation whose value on each sub-interval is the
//! mean of the target there, i.e. the L2-orthogonal projection onto
//! piecewise constants:
//!
//! ```text
//! dof[i] = 1 / (b_i - a_i) * integral_{a_i}^{b_i} target(x) dx
//! ```
//!
//! Integrals use adaptive Gauss-Kronrod quadrature, see
//! [`crate::quadrature::adaptive`].


use crate::approximation::algorithms::Algorithm;
use crate::approximation::dof::DofLayout;
use crate::approximation::errors::ApproximationError;
use crate::approximation::traits::LocalScheme;
use crate::partition::Partition;
use crate::quadrature::adaptive::integrate;
use crate::quadrature::config::QuadCfg;


/// Cell-average scheme
///
/// # Fields
/// - `quad` : [`QuadCfg`] used for the cell integrals
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CellAverage {
    quad: QuadCfg,
}
impl CellAverage {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_quad(mut self, quad: QuadCfg) -> Self { self.quad = quad; self }

    #[inline] #[must_use] pub fn quad(&self) -> &QuadCfg { &self.quad }
}

impl LocalScheme for CellAverage {
    fn algorithm(&self) -> Algorithm { Algorithm::CellAverage }
    fn continuous(&self) -> bool { false }

    /// # Errors
    /// [`ApproximationError::Quadrature`] if a cell integral fails, including
    /// non-finite target values inside the cell.
    fn build_dof(
        &self,
        partition: &Partition,
        target: &dyn Fn(f64) -> f64,
    ) -> Result<DofLayout, ApproximationError> {
        let dof = partition
            .intervals()
            .map(|(a, b)| {
                let report = integrate(target, a, b, &self.quad)?;
                Ok(report.integral / (b - a))
            })
            .collect::<Result<Vec<_>, ApproximationError>>()?;

        Ok(DofLayout::per_interval(dof))
    }

    #[inline]
    fn evaluate_on_interval(&self, _x: f64, dofs: &[f64], _bounds: (f64, f64)) -> f64 {
        dofs[0]
    }
}
