// common helpers
pub mod config;
pub mod errors;
pub mod report;

// rules
pub mod adaptive;
pub mod trapezoid;

pub use config::QuadCfg;
pub use report::QuadReport;
