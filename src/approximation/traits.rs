use crate::approximation::algorithms::Algorithm;
use crate::approximation::dof::DofLayout;
use crate::approximation::errors::ApproximationError;
use crate::approximation::samples::{sample_intervals, IntervalSamples};
use crate::partition::Partition;

/// A local approximation scheme.
///
/// Implementors only decide how dofs are built and how a local model is
/// evaluated; lookup and dof gathering live in
/// [`crate::approximation::Approximant`].
pub trait LocalScheme {
    fn algorithm(&self) -> Algorithm;

    /// `true` if neighbouring intervals share dofs at their common node.
    fn continuous(&self) -> bool;

    /// Builds the dof vector and its interval assignment.
    /// Pure function of `partition` and `target`.
    fn build_dof(
        &self,
        partition: &Partition,
        target: &dyn Fn(f64) -> f64,
    ) -> Result<DofLayout, ApproximationError>;

    /// Evaluates the local model at `x` from the interval's own dofs and its
    /// bounds `(lower, upper)` only.
    fn evaluate_on_interval(&self, x: f64, dofs: &[f64], bounds: (f64, f64)) -> f64;
}

/// Read-only view of a built approximation, used by error norms, the EOC
/// tracker and external reporting code.
pub trait Approximation {
    fn algorithm(&self) -> Algorithm;
    fn partition(&self) -> &Partition;

    /// Value of the approximated function.
    fn target(&self, x: f64) -> f64;

    fn dof(&self) -> &[f64];

    #[inline]
    fn ndof(&self) -> usize {
        self.dof().len()
    }

    fn continuous(&self) -> bool;

    /// Evaluates the local model of sub-interval `interval` at `x`,
    /// skipping the lookup.
    ///
    /// At the right end of an interval of a discontinuous approximant this
    /// gives the left limit of the jump, unlike [`Approximation::evaluate`].
    ///
    /// # Panics
    /// If `interval >= self.partition().len()`.
    fn evaluate_in_interval(&self, interval: usize, x: f64) -> f64;

    /// Evaluates the approximant at `x`.
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        self.evaluate_in_interval(self.partition().interval_from_point(x), x)
    }

    /// Evaluates many points.
    #[inline]
    fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Plot-ready samples of target and approximant on every sub-interval.
    /// See [`sample_intervals`].
    fn samples(&self, points_per_interval: usize) -> Result<Vec<IntervalSamples>, ApproximationError> {
        sample_intervals(self, points_per_interval)
    }
}
