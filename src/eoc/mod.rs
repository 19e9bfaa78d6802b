// common helpers
pub mod errors;
pub mod refinement;
pub mod report;

// tracker
pub mod tracker;
pub use report::{EocRow, EocSummary};
pub use tracker::{estimate, ConvergenceVariable, EocTracker};
