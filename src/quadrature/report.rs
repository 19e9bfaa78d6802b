//! Defines the [`QuadReport`] struct returned by adaptive quadrature.

/// Summary of a converged adaptive quadrature run.
///
/// [`QuadReport`]
/// - `integral`       : integral estimate
/// - `error_estimate` : summed |K15 - G7| over the final panels
/// - `subdivisions`   : number of panels at termination
/// - `evaluations`    : total integrand evaluations
#[derive(Debug, Copy, Clone)]
pub struct QuadReport {
    pub integral       : f64,
    pub error_estimate : f64,
    pub subdivisions   : usize,
    pub evaluations    : usize,
}
