//! Adaptive Gauss-Kronrod Quadrature
//!
//! Globally adaptive integration with the 7-point Gauss / 15-point
//! [Kronrod](https://en.wikipedia.org/wiki/Gauss%E2%80%93Kronrod_quadrature_formula)
//! pair. Every panel carries its K15 estimate and `|K15 - G7|` as error
//! estimate; the panel with the largest error is bisected until the summed
//! error meets the tolerance of [`QuadCfg`] or the panel cap is reached.
//!
//! [`integrate_piecewise`] seeds the panel list with given breakpoints and
//! passes the index of the piece a node falls in to the integrand, so a
//! piecewise integrand is never sampled across a break. The tolerance
//! applies to the total over all pieces.
//!
//! Nodes are interior to each panel, so the integrand is never sampled at
//! the panel ends.


use log::{trace, warn};

use crate::quadrature::config::QuadCfg;
use crate::quadrature::errors::QuadratureError;
use crate::quadrature::report::QuadReport;


/// Kronrod abscissae on [-1, 1], descending, center last.
/// Odd entries are the Gauss abscissae.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_639_206_854_697_526_329,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.586_087_235_467_691_130_294_144_845_693_013,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.0,
];

/// Kronrod weights matching [`XGK`].
const WGK: [f64; 8] = [
    0.022_935_322_010_529_224_963_732_008_058_970,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.209_482_141_084_727_828_012_999_174_891_714,
];

/// Gauss weights for XGK[1], XGK[3], XGK[5] and the center.
const WG: [f64; 4] = [
    0.129_484_966_168_869_693_270_611_432_679_082,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.417_959_183_673_469_387_755_102_040_816_327,
];


#[derive(Debug, Copy, Clone)]
struct Panel {
    piece:    usize,
    a:        f64,
    b:        f64,
    integral: f64,
    error:    f64,
}

/// Applies the G7-K15 pair on `[a, b]`, a part of piece `piece`.
fn gauss_kronrod<E>(eval: &mut E, piece: usize, a: f64, b: f64) -> Result<Panel, QuadratureError>
where E: FnMut(usize, f64) -> Result<f64, QuadratureError> {
    let center = 0.5 * (a + b);
    let half   = 0.5 * (b - a);

    let fc = eval(piece, center)?;
    let mut kronrod = WGK[7] * fc;
    let mut gauss   = WG[3]  * fc;

    for j in 0..7 {
        let dx  = half * XGK[j];
        let sum = eval(piece, center - dx)? + eval(piece, center + dx)?;
        kronrod += WGK[j] * sum;
        if j % 2 == 1 {
            gauss += WG[j / 2] * sum;
        }
    }

    Ok(Panel {
        piece,
        a,
        b,
        integral: kronrod * half,
        error:    ((kronrod - gauss) * half).abs(),
    })
}

/// Integrates `func` over `[a, b]` by adaptive G7-K15 quadrature.
///
/// # Arguments
///
/// ┌ `func` - integrand, must be finite on the open interval `(a, b)`
/// ├ `a`    - lower bound, finite and less than `b`
/// ├ `b`    - upper bound, finite and greater than `a`
/// └ `cfg`  - tolerances and panel cap, see [`QuadCfg`]
///
/// # Returns
///
/// [`QuadReport`] with the integral, its error estimate, the final number of
/// panels and the number of integrand evaluations.
///
/// # Errors
///
/// ┌ [`QuadratureError::InvalidBounds`]       - `a`/`b` non-finite or `a >= b`
/// ├ [`QuadratureError::NonFiniteEvaluation`] - `func(x)` is NaN or infinite
/// ├ [`QuadratureError::NotConverged`]        - tolerance not met with
/// │                                            `cfg.max_subdivisions` panels
/// └ invalid `cfg` values, see [`QuadCfg::validate`]
///
/// # Notes
/// └ Failures are never retried with other parameters; the caller decides.
pub fn integrate<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: &QuadCfg,
) -> Result<QuadReport, QuadratureError>
where F: FnMut(f64) -> f64 {
    integrate_piecewise(|_, x| func(x), &[a, b], cfg)
}

/// Integrates a piecewise integrand over `[breaks[0], breaks[n]]` in one
/// adaptive run.
///
/// `func(i, x)` is only called with `breaks[i] < x < breaks[i+1]`. Every
/// piece starts as one panel; the worst panel over all pieces is bisected
/// until the summed error is below `max(abs_tol, rel_tol * |integral|)`.
///
/// # Arguments
///
/// ┌ `func`   - integrand of piece `i` at `x`
/// ├ `breaks` - at least two finite, strictly increasing breakpoints
/// └ `cfg`    - tolerances and panel cap; the cap is
///              `cfg.max_subdivisions` panels per piece
///
/// # Errors
///
/// ┌ [`QuadratureError::InsufficientPoints`]  - fewer than two breakpoints
/// ├ [`QuadratureError::InvalidBounds`]       - a piece `[a, b]` with non-finite
/// │                                            ends or `a >= b`
/// ├ [`QuadratureError::NonFiniteEvaluation`] - `func(i, x)` is NaN or infinite
/// ├ [`QuadratureError::NotConverged`]        - tolerance not met at the panel cap
/// └ invalid `cfg` values, see [`QuadCfg::validate`]
pub fn integrate_piecewise<F>(
    mut func: F,
    breaks: &[f64],
    cfg: &QuadCfg,
) -> Result<QuadReport, QuadratureError>
where F: FnMut(usize, f64) -> f64 {

    if breaks.len() < 2 {
        return Err(QuadratureError::InsufficientPoints { got: breaks.len() });
    }
    if let Some(w) = breaks
        .windows(2)
        .find(|w| !(w[0].is_finite() && w[1].is_finite()) || w[0] >= w[1])
    {
        return Err(QuadratureError::InvalidBounds { a: w[0], b: w[1] });
    }
    let (a, b) = (breaks[0], breaks[breaks.len() - 1]);

    let cfg = cfg.validate()?;
    let abs_tol = cfg.abs_tol();
    let rel_tol = cfg.rel_tol();
    let pieces  = breaks.len() - 1;
    let max_panels = cfg.max_subdivisions().saturating_mul(pieces);

    let mut evaluations = 0;

    // closure function, checks finiteness
    let mut eval = |piece: usize, x: f64| -> Result<f64, QuadratureError> {
        let fx = { evaluations += 1; func(piece, x) };
        if fx.is_finite() {
            Ok(fx)
        } else {
            Err(QuadratureError::NonFiniteEvaluation { x, fx })
        }
    };

    let mut panels = breaks
        .windows(2)
        .enumerate()
        .map(|(piece, w)| gauss_kronrod(&mut eval, piece, w[0], w[1]))
        .collect::<Result<Vec<_>, _>>()?;

    loop {
        let integral: f64 = panels.iter().map(|p| p.integral).sum();
        let error:    f64 = panels.iter().map(|p| p.error).sum();
        let tol = abs_tol.max(rel_tol * integral.abs());

        if error <= tol {
            return Ok(QuadReport {
                integral,
                error_estimate: error,
                subdivisions:   panels.len(),
                evaluations,
            });
        }

        let worst = panels
            .iter()
            .enumerate()
            .max_by(|(_, p), (_, q)| p.error.total_cmp(&q.error))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let panel = panels[worst];
        let mid   = 0.5 * (panel.a + panel.b);

        // cap reached, or the worst panel is too narrow to split in f64
        if panels.len() >= max_panels || !(panel.a < mid && mid < panel.b) {
            warn!(
                "quadrature on [{a}, {b}] stopped at {} panels: error {error:e} > tol {tol:e}",
                panels.len()
            );
            return Err(QuadratureError::NotConverged {
                estimate:     integral,
                error,
                subdivisions: panels.len(),
            });
        }

        panels.swap_remove(worst);
        panels.push(gauss_kronrod(&mut eval, panel.piece, panel.a, mid)?);
        panels.push(gauss_kronrod(&mut eval, panel.piece, mid, panel.b)?);

        trace!(
            "bisected [{}, {}] at {mid}: {} panels, error {error:e}",
            panel.a, panel.b, panels.len()
        );
    }
}
