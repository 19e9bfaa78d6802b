// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub(crate) mod pointwise;
pub use algorithms::Norm;
pub use config::NormCfg;

// norms
pub mod lp;
pub mod max;
pub mod trapezoid;
pub use lp::{l1_norm, l2_norm, lp_norm};
pub use max::max_norm;
pub use trapezoid::l2_trapezoidal_norm;
