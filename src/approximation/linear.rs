//! Continuous Piecewise Linear Approximation
//!
//! Nodal interpolant: one dof per node, `dof[i] = target(points[i])`, shared
//! by the two sub-intervals meeting at that node. On `[x_i, x_{i+1}]`
//!
//! ```text
//! u(x) = dof[i] + (dof[i+1] - dof[i]) * (x - x_i) / (x_{i+1} - x_i)
//! ```


use crate::approximation::algorithms::Algorithm;
use crate::approximation::dof::{sample_target, DofLayout};
use crate::approximation::errors::ApproximationError;
use crate::approximation::traits::LocalScheme;
use crate::partition::Partition;


#[inline]
fn lerp(x0: f64, x1: f64, y0: f64, y1: f64, xq: f64) -> f64 {
    y0 + (y1 - y0) * (xq - x0) / (x1 - x0)
}

/// Continuous piecewise linear scheme, `NDOF = N + 1`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LinearContinuous;

impl LocalScheme for LinearContinuous {
    fn algorithm(&self) -> Algorithm { Algorithm::LinearContinuous }
    fn continuous(&self) -> bool { true }

    fn build_dof(
        &self,
        partition: &Partition,
        target: &dyn Fn(f64) -> f64,
    ) -> Result<DofLayout, ApproximationError> {
        let dof = partition
            .points()
            .iter()
            .map(|&x| sample_target(target, x))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DofLayout::per_node(dof))
    }

    #[inline]
    fn evaluate_on_interval(&self, x: f64, dofs: &[f64], bounds: (f64, f64)) -> f64 {
        let (x0, x1) = bounds;
        lerp(x0, x1, dofs[0], dofs[1], x)
    }
}
