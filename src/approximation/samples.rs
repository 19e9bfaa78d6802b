//! Snapshots of an approximation for plotting and tabulation.
//!
//! Rendering lives outside this crate; it receives [`IntervalSamples`] and
//! draws one segment per sub-interval so jumps of discontinuous approximants
//! are not bridged.


use crate::approximation::errors::ApproximationError;
use crate::approximation::traits::Approximation;
use crate::partition::spacing::linspace;


/// Samples on one sub-interval.
///
/// [`IntervalSamples`]
/// - `interval` : sub-interval index
/// - `x`        : equally spaced abscissae, both bounds included
/// - `target`   : target values at `x`
/// - `approx`   : approximant values at `x`, from this interval's local model
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSamples {
    pub interval: usize,
    pub x:        Vec<f64>,
    pub target:   Vec<f64>,
    pub approx:   Vec<f64>,
}

impl IntervalSamples {
    /// Pointwise `|target - approx|`.
    pub fn abs_error(&self) -> Vec<f64> {
        self.target.iter().zip(&self.approx).map(|(t, a)| (t - a).abs()).collect()
    }
}

/// Samples `points_per_interval` equally spaced points on every sub-interval.
///
/// The right end of each interval is evaluated with that interval's local
/// model, which for a discontinuous approximant is the left limit of the
/// jump rather than the next interval's value.
///
/// # Errors
/// [`ApproximationError::InvalidSampleCount`] if `points_per_interval < 2`.
pub fn sample_intervals<A>(
    approx: &A,
    points_per_interval: usize,
) -> Result<Vec<IntervalSamples>, ApproximationError>
where A: Approximation + ?Sized {
    if points_per_interval < 2 {
        return Err(ApproximationError::InvalidSampleCount { got: points_per_interval });
    }

    Ok(approx
        .partition()
        .intervals()
        .enumerate()
        .map(|(interval, (a, b))| {
            let x = linspace(a, b, points_per_interval);
            let target = x.iter().map(|&xi| approx.target(xi)).collect();
            let values = x.iter().map(|&xi| approx.evaluate_in_interval(interval, xi)).collect();
            IntervalSamples { interval, x, target, approx: values }
        })
        .collect())
}
