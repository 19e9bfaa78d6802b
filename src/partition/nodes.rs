//! Interval Partition
//!
//! A [`Partition`] splits `[a, b]` into `N` sub-intervals by an ordered
//! sequence of nodes `points[0] < points[1] < ... < points[N]`.
//!
//! Sub-interval `i` is the half-open range `[points[i], points[i+1])`,
//! except the last one which is closed on both ends so the partition
//! covers `b` itself.


use crate::partition::errors::PartitionError;
use crate::partition::spacing::linspace;


/// Ordered, immutable set of nodes over an interval.
///
/// # Construction
/// - [`Partition::new`]     from explicit nodes
/// - [`Partition::uniform`] from bounds and a number of sub-intervals
///
/// # Invariants
/// - at least two nodes, all finite
/// - strictly increasing
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    points: Vec<f64>,
}

impl Partition {
    /// Builds a partition from explicit nodes.
    ///
    /// # Errors
    /// ┌ [`PartitionError::InsufficientPoints`] - fewer than two nodes
    /// ├ [`PartitionError::NonFinite`]          - a node is NaN or infinite
    /// └ [`PartitionError::NonIncreasing`]      - `points[i] <= points[i-1]`
    pub fn new(points: Vec<f64>) -> Result<Self, PartitionError> {
        if points.len() < 2 {
            return Err(PartitionError::InsufficientPoints { got: points.len() });
        }
        if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
            return Err(PartitionError::NonFinite { idx });
        }
        for idx in 1..points.len() {
            if points[idx] <= points[idx - 1] {
                return Err(PartitionError::NonIncreasing {
                    idx,
                    prev: points[idx - 1],
                    got : points[idx],
                });
            }
        }

        Ok(Self { points })
    }

    /// Builds `n` equally spaced sub-intervals covering `[a, b]`.
    ///
    /// # Errors
    /// ┌ [`PartitionError::NoIntervals`]   - `n == 0`
    /// └ [`PartitionError::InvalidBounds`] - `a` or `b` non-finite, or `a >= b`
    pub fn uniform(a: f64, b: f64, n: usize) -> Result<Self, PartitionError> {
        if n == 0 {
            return Err(PartitionError::NoIntervals { got: n });
        }
        if !(a.is_finite() && b.is_finite()) || a >= b {
            return Err(PartitionError::InvalidBounds { a, b });
        }

        // tiny spans with huge n can collapse nodes, `new` rejects that
        Self::new(linspace(a, b, n + 1))
    }

    /// Number of sub-intervals `N`.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len() - 1
    }

    /// Always `false`; a partition holds at least one sub-interval.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline] pub fn points(&self) -> &[f64] { &self.points }
    #[inline] pub fn lower(&self)  -> f64    { self.points[0] }
    #[inline] pub fn upper(&self)  -> f64    { self.points[self.points.len() - 1] }

    /// Bounds `(lower, upper)` of sub-interval `i`.
    ///
    /// # Panics
    /// If `i >= self.len()`.
    #[inline]
    pub fn interval(&self, i: usize) -> (f64, f64) {
        (self.points[i], self.points[i + 1])
    }

    /// Iterates over `(lower, upper)` of every sub-interval, in order.
    pub fn intervals(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Index of the sub-interval containing `x`, by binary search.
    ///
    /// # Behavior
    /// - `x` equal to an interior node belongs to the interval starting there.
    /// - `x == upper()` belongs to the last interval.
    ///
    /// # Domain extension
    /// Points outside `[lower(), upper()]` are clamped: anything left of the
    /// domain (and NaN) maps to `0`, anything right of it to `len() - 1`.
    /// The approximants therefore extend their first and last local model
    /// beyond the partition.
    pub fn interval_from_point(&self, x: f64) -> usize {
        let n = self.len();

        // negated comparison so NaN lands here as well
        if !(x > self.points[0]) {
            return 0;
        }
        if x >= self.points[n] {
            return n - 1;
        }

        // number of nodes <= x, at least 1 and at most n here
        self.points.partition_point(|&p| p <= x) - 1
    }
}
