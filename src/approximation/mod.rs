// common helpers
pub mod algorithms;
pub mod dof;
pub mod errors;
pub mod samples;
pub mod traits;
pub use traits::{Approximation, LocalScheme};

// approximant and schemes
pub mod approximant;
pub mod cell_average;
pub mod linear;
pub mod midpoint;
pub use approximant::Approximant;
pub use cell_average::CellAverage;
pub use linear::LinearContinuous;
pub use midpoint::Midpoint;
