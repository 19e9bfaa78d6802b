//! Piecewise approximation of scalar functions on an interval.
//!
//! ┌ [`partition`]     : nodes, sub-intervals, point lookup
//! ├ [`quadrature`]    : adaptive Gauss-Kronrod and trapezoid rules
//! ├ [`approximation`] : midpoint, cell-average and continuous linear schemes
//! ├ [`norms`]         : L1, L2, Lp, trapezoidal L2 and max error norms
//! └ [`eoc`]           : experimental order of convergence over refinements
//!
//! ```
//! use piecewise::approximation::Approximant;
//! use piecewise::eoc::EocTracker;
//! use piecewise::norms::{Norm, NormCfg};
//! use piecewise::partition::Partition;
//!
//! let mut tracker = EocTracker::new(Norm::Max);
//! for n in [4, 8, 16] {
//!     let partition = Partition::uniform(0.0, 1.0, n).unwrap();
//!     let approx = Approximant::linear(&partition, |x: f64| x * x).unwrap();
//!     tracker.record_run(&approx, &NormCfg::new()).unwrap();
//! }
//! assert!((tracker.eoc()[2] - 2.0).abs() < 0.2);
//! ```

pub mod partition;
pub mod quadrature;
pub mod approximation;
pub mod norms;
pub mod eoc;
