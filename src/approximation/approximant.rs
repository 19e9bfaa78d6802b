//! Approximant
//!
//! Binds a [`LocalScheme`] to a target function on a [`Partition`].
//! The dof vector is built once, eagerly, in [`Approximant::new`] and is
//! read-only afterwards.
//!
//! Evaluation at `x`:
//! 1. `i = partition.interval_from_point(x)`
//! 2. gather `dof[dof_index[i]]` and the bounds of interval `i`
//! 3. `scheme.evaluate_on_interval(x, dofs, bounds)`


use std::ops::Range;

use log::debug;

use crate::approximation::algorithms::Algorithm;
use crate::approximation::cell_average::CellAverage;
use crate::approximation::errors::ApproximationError;
use crate::approximation::linear::LinearContinuous;
use crate::approximation::midpoint::Midpoint;
use crate::approximation::traits::{Approximation, LocalScheme};
use crate::partition::Partition;


/// Approximation of `target` on `partition` by scheme `S`.
///
/// # Fields
/// - `partition` : borrowed partition the approximant lives on
/// - `target`    : the approximated function
/// - `scheme`    : [`LocalScheme`] (e.g. [`Midpoint`])
/// - `dof`       : coefficient vector
/// - `dof_index` : dof range read by each sub-interval
#[derive(Debug, Clone)]
pub struct Approximant<'a, S, F> {
    partition: &'a Partition,
    target:    F,
    scheme:    S,
    dof:       Vec<f64>,
    dof_index: Vec<Range<usize>>,
}

impl<'a, S, F> Approximant<'a, S, F>
where
    S: LocalScheme,
    F: Fn(f64) -> f64,
{
    /// Builds the approximant, computing all dofs.
    ///
    /// # Errors
    /// ┌ [`ApproximationError::NonFiniteTarget`] - target NaN/inf at a sample point
    /// ├ [`ApproximationError::Quadrature`]      - cell integral failed (cell average)
    /// └ [`ApproximationError::LayoutIntervalMismatch`] /
    ///   [`ApproximationError::LayoutRangeInvalid`] - scheme returned an
    ///   inconsistent layout
    pub fn new(partition: &'a Partition, target: F, scheme: S) -> Result<Self, ApproximationError> {
        let layout = scheme.build_dof(partition, &target)?;
        layout.validate(partition)?;

        debug!(
            "{}: built {} dofs on {} intervals",
            scheme.algorithm(),
            layout.ndof(),
            partition.len()
        );

        Ok(Self {
            partition,
            target,
            scheme,
            dof:       layout.dof,
            dof_index: layout.dof_index,
        })
    }

    #[inline] pub fn scheme(&self) -> &S { &self.scheme }
    #[inline] pub fn dof_index(&self) -> &[Range<usize>] { &self.dof_index }
}

impl<'a, F: Fn(f64) -> f64> Approximant<'a, Midpoint, F> {
    /// Midpoint approximant with `beta = 0.5`.
    pub fn midpoint(partition: &'a Partition, target: F) -> Result<Self, ApproximationError> {
        Self::new(partition, target, Midpoint::new())
    }
}

impl<'a, F: Fn(f64) -> f64> Approximant<'a, CellAverage, F> {
    /// Cell-average approximant with the default quadrature settings.
    pub fn cell_average(partition: &'a Partition, target: F) -> Result<Self, ApproximationError> {
        Self::new(partition, target, CellAverage::new())
    }
}

impl<'a, F: Fn(f64) -> f64> Approximant<'a, LinearContinuous, F> {
    pub fn linear(partition: &'a Partition, target: F) -> Result<Self, ApproximationError> {
        Self::new(partition, target, LinearContinuous)
    }
}

impl<'a, S, F> Approximation for Approximant<'a, S, F>
where
    S: LocalScheme,
    F: Fn(f64) -> f64,
{
    #[inline] fn algorithm(&self)  -> Algorithm  { self.scheme.algorithm() }
    #[inline] fn partition(&self)  -> &Partition { self.partition }
    #[inline] fn target(&self, x: f64) -> f64    { (self.target)(x) }
    #[inline] fn dof(&self)        -> &[f64]     { &self.dof }
    #[inline] fn continuous(&self) -> bool       { self.scheme.continuous() }

    #[inline]
    fn evaluate_in_interval(&self, interval: usize, x: f64) -> f64 {
        let dofs   = &self.dof[self.dof_index[interval].clone()];
        let bounds = self.partition.interval(interval);
        self.scheme.evaluate_on_interval(x, dofs, bounds)
    }
}
