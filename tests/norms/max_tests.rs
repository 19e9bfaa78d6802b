//! tests for the maximum norm
use approx::{assert_abs_diff_eq, assert_relative_eq};
use piecewise::approximation::{Approximant, Midpoint};
use piecewise::norms::errors::NormError;
use piecewise::norms::{max_norm, Norm, NormCfg};
use piecewise::partition::Partition;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn midpoint_squares_on_quarter_grid() -> TestResult {
    // worst at x = 1: 1 - (7/8)^2
    let p = Partition::uniform(0.0, 1.0, 4)?;
    let u = Approximant::midpoint(&p, |x: f64| x * x)?;

    assert_eq!(max_norm(&u, &NormCfg::new())?, 0.234375);
    assert_eq!(max_norm(&u, &NormCfg::new().with_monotone_shortcut(true))?, 0.234375);
    Ok(())
}

#[test]
fn shortcut_matches_sampling_for_monotone_error() -> TestResult {
    let p = Partition::uniform(-1.0, 2.0, 9)?;
    let u = Approximant::midpoint(&p, f64::exp)?;

    let sampled  = max_norm(&u, &NormCfg::new().with_resolution(101))?;
    let shortcut = max_norm(&u, &NormCfg::new().with_monotone_shortcut(true))?;
    assert_eq!(sampled, shortcut);
    Ok(())
}

#[test]
fn shortcut_misses_interior_maximum() -> TestResult {
    // linear interpolant is exact at nodes, the error peaks at h^2 / 4 mid-cell
    let p = Partition::uniform(0.0, 1.0, 4)?;
    let u = Approximant::linear(&p, |x: f64| x * x)?;

    let sampled = max_norm(&u, &NormCfg::new())?;
    assert_relative_eq!(sampled, 1.0 / 64.0, max_relative = 1e-12);

    let shortcut = max_norm(&u, &NormCfg::new().with_monotone_shortcut(true))?;
    assert_abs_diff_eq!(shortcut, 0.0, epsilon = 1e-15);
    Ok(())
}

#[test]
fn right_end_uses_left_limit() -> TestResult {
    // left endpoint sampling: cell [0, 0.8] holds 0, so the error reaches 0.8 at x = 0.8
    let p = Partition::new(vec![0.0, 0.8, 1.0])?;
    let u = Approximant::new(&p, |x: f64| x, Midpoint::with_beta(0.0)?)?;

    assert_eq!(max_norm(&u, &NormCfg::new())?, 0.8);
    assert_eq!(Norm::Max.measure(&u, &NormCfg::new())?, 0.8);
    Ok(())
}

#[test]
fn non_finite_error_at_sample() -> TestResult {
    let p = Partition::uniform(0.0, 1.0, 4)?;
    let u = Approximant::midpoint(&p, |x: f64| 1.0 / (x - 0.5))?;

    let err = max_norm(&u, &NormCfg::new()).unwrap_err();
    assert!(matches!(
        err,
        NormError::NonFiniteError { x, got } if x == 0.5 && got.is_infinite()
    ));
    Ok(())
}

#[test]
fn rejects_resolution_below_two() -> TestResult {
    let p = Partition::uniform(0.0, 1.0, 2)?;
    let u = Approximant::midpoint(&p, |x: f64| x)?;

    let err = max_norm(&u, &NormCfg::new().with_resolution(0)).unwrap_err();
    assert!(matches!(err, NormError::InvalidResolution { got: 0 }));
    Ok(())
}

#[test]
fn default_config() {
    let cfg = NormCfg::new();
    assert_eq!(cfg.resolution(), NormCfg::DEFAULT_RESOLUTION);
    assert!(!cfg.monotone_shortcut());
    assert_eq!(cfg, NormCfg::default());
}
