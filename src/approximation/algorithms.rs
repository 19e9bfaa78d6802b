//! Defines the approximation scheme variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported schemes.

/// Local approximation scheme variants.
/// - [`Algorithm::Midpoint`]         piecewise constant, sampled at `a + beta * (b - a)`
/// - [`Algorithm::CellAverage`]      piecewise constant, L2 projection (cell mean)
/// - [`Algorithm::LinearContinuous`] continuous piecewise linear nodal interpolant
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Midpoint,
    CellAverage,
    LinearContinuous,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Midpoint         => "midpoint",
            Algorithm::CellAverage      => "cell_average",
            Algorithm::LinearContinuous => "linear_continuous",
        }
    }

    /// Convergence order in L1, L2 and L-infinity for smooth targets.
    pub const fn theoretical_order(self) -> f64 {
        match self {
            Algorithm::Midpoint | Algorithm::CellAverage => 1.0,
            Algorithm::LinearContinuous                  => 2.0,
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
