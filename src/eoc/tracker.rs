//! Experimental Order of Convergence
//!
//! For consecutive runs with errors `e` and problem sizes `d`
//!
//! ```text
//! eoc[n] = log2(e[n-1] / e[n]) / log2(d[n] / d[n-1])
//! ```
//!
//! `eoc[0]` has no predecessor and is `NaN`. Any entry whose ratio is not
//! defined (zero error on either side, or equal sizes) is `NaN` as well;
//! undefined estimates are data, not errors.


use log::debug;

use crate::approximation::Approximation;
use crate::eoc::errors::EocError;
use crate::eoc::report::{EocRow, EocSummary};
use crate::norms::algorithms::Norm;
use crate::norms::config::NormCfg;


/// What counts as the problem size `d` of a run.
/// - [`ConvergenceVariable::Intervals`] number of sub-intervals `N` (default)
/// - [`ConvergenceVariable::Dof`]       number of degrees of freedom `NDOF`
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ConvergenceVariable {
    #[default]
    Intervals,
    Dof,
}

/// EOC estimate between two runs, `NaN` when undefined.
pub fn estimate(e_prev: f64, e_cur: f64, d_prev: usize, d_cur: usize) -> f64 {
    if !(e_prev > 0.0 && e_cur > 0.0) || d_prev == d_cur {
        return f64::NAN;
    }
    (e_prev / e_cur).log2() / (d_cur as f64 / d_prev as f64).log2()
}


/// Append-only history of errors over a refinement sequence.
///
/// # Fields
/// - `norm`     : [`Norm`] used by [`EocTracker::record_run`]
/// - `variable` : [`ConvergenceVariable`]
/// - `errors`   : one error per run
/// - `dofs`     : problem size per run
/// - `eoc`      : one estimate per run, first one `NaN`
///
/// The three histories always have the same length.
#[derive(Debug, Clone)]
pub struct EocTracker {
    norm:     Norm,
    variable: ConvergenceVariable,
    errors:   Vec<f64>,
    dofs:     Vec<usize>,
    eoc:      Vec<f64>,
}

impl EocTracker {
    pub fn new(norm: Norm) -> Self {
        Self {
            norm,
            variable: ConvergenceVariable::default(),
            errors:   Vec::new(),
            dofs:     Vec::new(),
            eoc:      Vec::new(),
        }
    }

    pub fn with_variable(mut self, v: ConvergenceVariable) -> Self { self.variable = v; self }

    #[inline] pub fn norm(&self)     -> Norm                { self.norm }
    #[inline] pub fn variable(&self) -> ConvergenceVariable { self.variable }
    #[inline] pub fn errors(&self)   -> &[f64]              { &self.errors }
    #[inline] pub fn dofs(&self)     -> &[usize]            { &self.dofs }
    #[inline] pub fn eoc(&self)      -> &[f64]              { &self.eoc }
    #[inline] pub fn len(&self)      -> usize               { self.errors.len() }
    #[inline] pub fn is_empty(&self) -> bool                { self.errors.is_empty() }

    /// Measures `approx` with the tracker's norm and records the run.
    ///
    /// The problem size is `approx.partition().len()` or `approx.ndof()`,
    /// depending on [`ConvergenceVariable`].
    ///
    /// # Errors
    /// [`EocError::Norm`] if the norm fails; nothing is recorded then.
    pub fn record_run<A>(&mut self, approx: &A, cfg: &NormCfg) -> Result<EocRow, EocError>
    where A: Approximation + ?Sized {
        let error = self.norm.measure(approx, cfg)?;
        let dofs = match self.variable {
            ConvergenceVariable::Intervals => approx.partition().len(),
            ConvergenceVariable::Dof       => approx.ndof(),
        };
        self.record(error, dofs)
    }

    /// Records an externally computed error.
    ///
    /// # Errors
    /// ┌ [`EocError::InvalidError`] - `error` negative or not finite
    /// └ [`EocError::ZeroDofs`]     - `dofs == 0`
    pub fn record(&mut self, error: f64, dofs: usize) -> Result<EocRow, EocError> {
        if !error.is_finite() || error < 0.0 {
            return Err(EocError::InvalidError { got: error });
        }
        if dofs == 0 {
            return Err(EocError::ZeroDofs { got: dofs });
        }

        let eoc = match (self.errors.last(), self.dofs.last()) {
            (Some(&e_prev), Some(&d_prev)) => estimate(e_prev, error, d_prev, dofs),
            _ => f64::NAN,
        };

        self.errors.push(error);
        self.dofs.push(dofs);
        self.eoc.push(eoc);

        debug!("{} run {}: d={dofs}, error={error:e}, eoc={eoc}", self.norm, self.len());

        Ok(EocRow { dofs, error, eoc })
    }

    /// Read-only view of the recorded runs.
    pub fn summary(&self) -> EocSummary<'_> {
        EocSummary::new(self.norm, &self.dofs, &self.errors, &self.eoc)
    }
}
