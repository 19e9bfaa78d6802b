//! tests for the quadrature based Lp norms
use approx::{assert_abs_diff_eq, assert_relative_eq};
use piecewise::approximation::{Approximant, Approximation};
use piecewise::eoc::EocTracker;
use piecewise::norms::errors::NormError;
use piecewise::norms::{l1_norm, l2_norm, lp_norm, max_norm, l2_trapezoidal_norm, Norm, NormCfg};
use piecewise::partition::Partition;
use piecewise::quadrature::errors::QuadratureError;
use piecewise::quadrature::QuadCfg;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn l1_of_single_midpoint_cell() -> TestResult {
    // |x^2 - 1/4| on [0, 1]: kink at 1/2
    let p = Partition::uniform(0.0, 1.0, 1)?;
    let u = Approximant::midpoint(&p, |x: f64| x * x)?;

    assert_relative_eq!(l1_norm(&u, &NormCfg::new())?, 0.25, max_relative = 1e-10);
    Ok(())
}

#[test]
fn l2_of_single_midpoint_cell() -> TestResult {
    let p = Partition::uniform(0.0, 1.0, 1)?;
    let u = Approximant::midpoint(&p, |x: f64| x * x)?;
    let expected = (1.0_f64 / 5.0 - 1.0 / 6.0 + 1.0 / 16.0).sqrt();

    assert_relative_eq!(l2_norm(&u, &NormCfg::new())?, expected, max_relative = 1e-12);
    Ok(())
}

#[test]
fn l2_of_linear_interpolant() -> TestResult {
    // error on each cell is (x - a)(b - x), so ||e||_2^2 = N h^5 / 30
    for n in [1, 3, 10] {
        let p = Partition::uniform(0.0, 1.0, n)?;
        let u = Approximant::linear(&p, |x: f64| x * x)?;
        let h = 1.0 / n as f64;

        let got = l2_norm(&u, &NormCfg::new())?;
        assert_relative_eq!(got, (h.powi(4) / 30.0).sqrt(), max_relative = 1e-10);
    }
    Ok(())
}

#[test]
fn zero_for_exactly_represented_target() -> TestResult {
    let p = Partition::new(vec![-1.0, 0.0, 0.5, 2.0])?;
    let u = Approximant::cell_average(&p, |_x: f64| 3.5)?;

    assert!(l1_norm(&u, &NormCfg::new())? < 1e-14);
    assert!(l2_norm(&u, &NormCfg::new())? < 1e-14);
    Ok(())
}

#[test]
fn lp_norm_general_exponent() -> TestResult {
    // |x - 1/2|^3 on [0, 1] integrates to 1/32
    let p = Partition::uniform(0.0, 1.0, 1)?;
    let u = Approximant::midpoint(&p, |x: f64| x)?;
    let cfg = NormCfg::new();

    let got = lp_norm(&u, 3.0, &cfg)?;
    assert_relative_eq!(got, (1.0_f64 / 32.0).cbrt(), max_relative = 1e-10);
    assert_eq!(Norm::Lp(3.0).measure(&u, &cfg)?, got);
    assert_eq!(Norm::L1.measure(&u, &cfg)?, l1_norm(&u, &cfg)?);
    assert_eq!(Norm::L2.measure(&u, &cfg)?, l2_norm(&u, &cfg)?);
    Ok(())
}

#[test]
fn jumps_are_integrated_per_interval() -> TestResult {
    // kink at each cell midpoint, two panels per cell resolve it
    let p = Partition::uniform(0.0, 1.0, 8)?;
    let u = Approximant::midpoint(&p, |x: f64| 2.0 * x)?;
    let cfg = NormCfg::new().with_quad(QuadCfg::new().with_max_subdivisions(2));

    // |2x - 2m| on a cell of width h integrates to h^2 / 2
    let h: f64 = 0.125;
    assert_relative_eq!(l1_norm(&u, &cfg)?, 8.0 * h * h / 2.0, max_relative = 1e-12);
    Ok(())
}

#[test]
fn rejects_invalid_exponents() -> TestResult {
    let p = Partition::uniform(0.0, 1.0, 2)?;
    let u = Approximant::midpoint(&p, |x: f64| x)?;

    for p in [0.5, 0.0, -2.0, f64::NAN, f64::INFINITY] {
        let err = lp_norm(&u, p, &NormCfg::new()).unwrap_err();
        assert!(matches!(err, NormError::InvalidExponent { .. }), "p={p}");
    }
    Ok(())
}

#[test]
fn propagates_quadrature_failure() -> TestResult {
    let p = Partition::uniform(0.0, 1.0, 1)?;
    let u = Approximant::midpoint(&p, |x: f64| x)?;
    let cfg = NormCfg::new().with_quad(QuadCfg::new().with_max_subdivisions(1));

    let err = l1_norm(&u, &cfg).unwrap_err();
    assert!(matches!(
        err,
        NormError::Quadrature(QuadratureError::NotConverged { subdivisions: 1, .. })
    ));
    Ok(())
}

#[test]
fn norm_names() {
    assert_eq!(Norm::L1.to_string(), "l1");
    assert_eq!(Norm::L2.to_string(), "l2");
    assert_eq!(Norm::Lp(3.0).to_string(), "l3");
    assert_eq!(Norm::Lp(1.5).to_string(), "l1.5");
    assert_eq!(Norm::Lp(1.5).norm_name(), "lp");
    assert_eq!(Norm::L2Trapezoidal.to_string(), "l2_trapezoidal");
    assert_eq!(Norm::Max.to_string(), "max");
}

/// L1 error of a midpoint approximant of `exp`: each cell contributes
/// `exp(m) * 4 sinh^2(h / 4)`.
fn midpoint_exp_l1(u: &dyn Approximation) -> f64 {
    u.partition()
        .intervals()
        .zip(u.dof())
        .map(|((a, b), dof)| dof * 4.0 * ((b - a) / 4.0).sinh().powi(2))
        .sum()
}

#[test]
fn l1_tolerance_bounds_the_total_on_fine_meshes() -> TestResult {
    for n in [1024, 4096] {
        let p = Partition::uniform(0.0, 1.0, n)?;
        let u = Approximant::midpoint(&p, f64::exp)?;

        let got = l1_norm(&u, &NormCfg::new())?;
        let exact = midpoint_exp_l1(&u);
        assert!(
            (got - exact).abs() <= QuadCfg::DEFAULT_ABS_TOL,
            "n={n}: got {got:e}, exact {exact:e}"
        );
    }
    Ok(())
}

#[test]
fn l1_eoc_stays_first_order_under_refinement() -> TestResult {
    let mut t = EocTracker::new(Norm::L1);
    for n in [512, 1024, 2048] {
        let p = Partition::uniform(0.0, 1.0, n)?;
        let u = Approximant::midpoint(&p, f64::exp)?;
        t.record_run(&u, &NormCfg::new())?;
    }

    for &eoc in &t.eoc()[1..] {
        assert_abs_diff_eq!(eoc, 1.0, epsilon = 1e-3);
    }
    Ok(())
}

#[test]
fn quadrature_settings_only_affect_lp() -> TestResult {
    let p = Partition::uniform(0.0, 1.0, 4)?;
    let u = Approximant::midpoint(&p, |x: f64| x)?;
    let bad_quad = NormCfg::new().with_quad(QuadCfg::new().with_abs_tol(-1.0));

    let err = l1_norm(&u, &bad_quad).unwrap_err();
    assert!(matches!(err, NormError::Quadrature(QuadratureError::InvalidAbsTol { .. })));

    assert_eq!(max_norm(&u, &bad_quad)?, max_norm(&u, &NormCfg::new())?);
    assert_eq!(
        l2_trapezoidal_norm(&u, &bad_quad)?,
        l2_trapezoidal_norm(&u, &NormCfg::new())?
    );

    // resolution is a sampling setting, the Lp norms ignore it
    let coarse = NormCfg::new().with_resolution(0);
    assert_eq!(l2_norm(&u, &coarse)?, l2_norm(&u, &NormCfg::new())?);
    Ok(())
}
