//! Refinement sequences for convergence studies.


use crate::partition::errors::PartitionError;
use crate::partition::Partition;


/// `[n_start, 2 n_start, 4 n_start, ...]` with `runs` entries.
///
/// Stops early if the next size would overflow `usize`.
pub fn doubling_sizes(n_start: usize, runs: usize) -> Vec<usize> {
    (0..runs)
        .map_while(|k| {
            let factor = 2usize.checked_pow(u32::try_from(k).ok()?)?;
            n_start.checked_mul(factor)
        })
        .collect()
}

/// One uniform partition of `[a, b]` per entry of `sizes`.
///
/// # Errors
/// The first [`PartitionError`] raised by [`Partition::uniform`].
pub fn uniform_sequence(a: f64, b: f64, sizes: &[usize]) -> Result<Vec<Partition>, PartitionError> {
    sizes.iter().map(|&n| Partition::uniform(a, b, n)).collect()
}
