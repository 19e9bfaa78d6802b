//! Defines the error norm variants
//!
//! Provides the [`Norm`] enum so a norm can be chosen as data, e.g. when
//! constructing an [`crate::eoc::EocTracker`].

use crate::approximation::Approximation;
use crate::norms::config::NormCfg;
use crate::norms::errors::NormError;
use crate::norms::lp::lp_norm;
use crate::norms::max::max_norm;
use crate::norms::trapezoid::l2_trapezoidal_norm;

/// Error norm variants.
/// - [`Norm::L1`]            adaptive quadrature, p = 1
/// - [`Norm::L2`]            adaptive quadrature, p = 2
/// - [`Norm::Lp`]            adaptive quadrature, arbitrary p >= 1
/// - [`Norm::L2Trapezoidal`] sampled, trapezoid rule
/// - [`Norm::Max`]           sampled maximum; honours `monotone_shortcut`
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Norm {
    L1,
    L2,
    Lp(f64),
    L2Trapezoidal,
    Max,
}

impl Norm {
    pub const fn norm_name(self) -> &'static str {
        match self {
            Norm::L1            => "l1",
            Norm::L2            => "l2",
            Norm::Lp(_)         => "lp",
            Norm::L2Trapezoidal => "l2_trapezoidal",
            Norm::Max           => "max",
        }
    }

    /// Measures `target - approx` in this norm.
    pub fn measure<A>(self, approx: &A, cfg: &NormCfg) -> Result<f64, NormError>
    where A: Approximation + ?Sized {
        match self {
            Norm::L1            => lp_norm(approx, 1.0, cfg),
            Norm::L2            => lp_norm(approx, 2.0, cfg),
            Norm::Lp(p)         => lp_norm(approx, p, cfg),
            Norm::L2Trapezoidal => l2_trapezoidal_norm(approx, cfg),
            Norm::Max           => max_norm(approx, cfg),
        }
    }
}
impl std::fmt::Display for Norm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Norm::Lp(p) => write!(f, "l{p}"),
            _           => write!(f, "{}", self.norm_name()),
        }
    }
}
