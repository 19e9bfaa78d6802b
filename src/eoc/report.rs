//! Defines the read-only views handed out by [`crate::eoc::EocTracker`].
//!
//! [`EocSummary`] borrows the tracker's parallel histories; tables and
//! plots are built on top of it outside this crate.

use crate::norms::algorithms::Norm;

/// One recorded run.
///
/// [`EocRow`]
/// - `dofs`  : problem size
/// - `error` : measured error
/// - `eoc`   : estimate against the previous run, `NaN` if undefined
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EocRow {
    pub dofs:  usize,
    pub error: f64,
    pub eoc:   f64,
}

impl EocRow {
    #[inline]
    pub fn is_defined(&self) -> bool {
        !self.eoc.is_nan()
    }
}

/// Parallel `(dofs, errors, eoc)` sequences of a tracker.
#[derive(Debug, Copy, Clone)]
pub struct EocSummary<'a> {
    pub norm:   Norm,
    pub dofs:   &'a [usize],
    pub errors: &'a [f64],
    pub eoc:    &'a [f64],
}

impl<'a> EocSummary<'a> {
    pub(crate) fn new(norm: Norm, dofs: &'a [usize], errors: &'a [f64], eoc: &'a [f64]) -> Self {
        Self { norm, dofs, errors, eoc }
    }

    #[inline] pub fn len(&self)      -> usize { self.errors.len() }
    #[inline] pub fn is_empty(&self) -> bool  { self.errors.is_empty() }

    pub fn row(&self, i: usize) -> Option<EocRow> {
        Some(EocRow {
            dofs:  *self.dofs.get(i)?,
            error: *self.errors.get(i)?,
            eoc:   *self.eoc.get(i)?,
        })
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = EocRow> + 'a {
        let (dofs, errors, eoc) = (self.dofs, self.errors, self.eoc);
        (0..errors.len()).map(move |i| EocRow { dofs: dofs[i], error: errors[i], eoc: eoc[i] })
    }

    pub fn last(&self) -> Option<EocRow> {
        self.len().checked_sub(1).and_then(|i| self.row(i))
    }

    /// Largest defined estimate, `None` if every entry is `NaN`.
    pub fn max_eoc(&self) -> Option<f64> {
        self.eoc.iter().copied().filter(|e| !e.is_nan()).reduce(f64::max)
    }

    /// Upper y-axis limit for an EOC plot: `ceil(max eoc) + 0.1`.
    pub fn axis_limit(&self) -> Option<f64> {
        self.max_eoc().map(|m| m.ceil() + 0.1)
    }
}
