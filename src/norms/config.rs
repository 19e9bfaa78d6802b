//! Shared configuration for error norms.
//!
//! [`NormCfg`]
//! ├ `resolution`        : samples per sub-interval (trapezoid and max norms)
//! ├ `monotone_shortcut` : max norm from interval endpoints only
//! └ `quad`              : [`QuadCfg`] for the Lp norms


use crate::norms::errors::NormError;
use crate::quadrature::config::QuadCfg;


/// Error norm configuration
///
/// # Defaults
///
/// ┌ DEFAULT_RESOLUTION - 25 samples per sub-interval
/// ├ `monotone_shortcut` - false
/// └ `quad`              - [`QuadCfg::default`]
///
/// # Notes
/// └ `monotone_shortcut` is only read by [`crate::norms::max_norm`]. It is
///   valid only when `|target - approx|` is monotone on every sub-interval,
///   e.g. a constant scheme on a monotone target. This is a precondition of
///   the caller and is never checked.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct NormCfg {
    resolution:        Option<usize>,
    monotone_shortcut: bool,
    quad:              QuadCfg,
}
impl NormCfg {
    pub const DEFAULT_RESOLUTION: usize = 25;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_resolution(mut self, v: usize) -> Self { self.resolution = Some(v); self }
    pub fn with_monotone_shortcut(mut self, v: bool) -> Self { self.monotone_shortcut = v; self }
    pub fn with_quad(mut self, v: QuadCfg) -> Self { self.quad = v; self }

    #[inline] #[must_use] pub fn resolution(&self) -> usize {
        self.resolution.unwrap_or(Self::DEFAULT_RESOLUTION)
    }
    #[inline] #[must_use] pub fn monotone_shortcut(&self) -> bool { self.monotone_shortcut }
    #[inline] #[must_use] pub fn quad(&self) -> &QuadCfg { &self.quad }

    /// Checks the sampling settings. `quad` is left to the quadrature
    /// routine, so the sampled norms never fail on it.
    pub fn validate(&self) -> Result<NormCfg, NormError> {
        let resolution = self.resolution();
        if resolution < 2 {
            return Err(NormError::InvalidResolution { got: resolution });
        }

        Ok(Self {
            resolution:        Some(resolution),
            monotone_shortcut: self.monotone_shortcut,
            quad:              self.quad,
        })
    }
}
