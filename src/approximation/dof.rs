//! Degrees of freedom and their assignment to sub-intervals.
//!
//! [`DofLayout`]
//! ├ `dof`       : coefficient vector, `NDOF = dof.len()`
//! └ `dof_index` : per sub-interval, the contiguous ordered range of dof
//!                 indices its local model reads
//!
//! Constant schemes use `i..i+1`; the continuous linear scheme shares nodes
//! between neighbours with `i..i+2`.


use std::ops::Range;

use crate::approximation::errors::ApproximationError;
use crate::partition::Partition;


#[derive(Debug, Clone, PartialEq)]
pub struct DofLayout {
    pub dof:       Vec<f64>,
    pub dof_index: Vec<Range<usize>>,
}

impl DofLayout {
    /// One dof per sub-interval; interval `i` reads `dof[i]`.
    pub fn per_interval(dof: Vec<f64>) -> Self {
        let dof_index = (0..dof.len()).map(|i| i..i + 1).collect();
        Self { dof, dof_index }
    }

    /// One dof per node; interval `i` reads `dof[i]` and `dof[i+1]`.
    pub fn per_node(dof: Vec<f64>) -> Self {
        let dof_index = (0..dof.len().saturating_sub(1)).map(|i| i..i + 2).collect();
        Self { dof, dof_index }
    }

    #[inline]
    pub fn ndof(&self) -> usize {
        self.dof.len()
    }

    /// Checks the layout covers every sub-interval of `partition` with a
    /// non-empty range inside `dof`.
    pub(crate) fn validate(&self, partition: &Partition) -> Result<(), ApproximationError> {
        if self.dof_index.len() != partition.len() {
            return Err(ApproximationError::LayoutIntervalMismatch {
                got:      self.dof_index.len(),
                expected: partition.len(),
            });
        }
        let ndof = self.ndof();
        for (interval, range) in self.dof_index.iter().enumerate() {
            if range.is_empty() || range.end > ndof {
                return Err(ApproximationError::LayoutRangeInvalid {
                    interval,
                    start: range.start,
                    end:   range.end,
                    ndof,
                });
            }
        }
        Ok(())
    }
}


/// Evaluates `target` at `x`, rejecting NaN and infinities.
#[inline]
pub(crate) fn sample_target(target: &dyn Fn(f64) -> f64, x: f64) -> Result<f64, ApproximationError> {
    let fx = target(x);
    if fx.is_finite() {
        Ok(fx)
    } else {
        Err(ApproximationError::NonFiniteTarget { x, fx })
    }
}
