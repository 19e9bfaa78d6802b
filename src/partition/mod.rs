// common helpers
pub mod errors;
pub(crate) mod spacing;

// partition
pub mod nodes;
pub use nodes::Partition;
