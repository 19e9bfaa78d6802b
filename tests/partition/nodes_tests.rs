//! tests for partition construction
use piecewise::partition::errors::PartitionError;
use piecewise::partition::Partition;

type TestResult = Result<(), PartitionError>;

#[test]
fn uniform_nodes() -> TestResult {
    let p = Partition::uniform(0.0, 1.0, 4)?;

    assert_eq!(p.len(), 4);
    assert_eq!(p.points(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(p.lower(), 0.0);
    assert_eq!(p.upper(), 1.0);
    Ok(())
}

#[test]
fn uniform_hits_right_bound_exactly() -> TestResult {
    let p = Partition::uniform(-0.3, 0.7, 7)?;
    assert_eq!(p.len(), 7);
    assert_eq!(p.points()[0], -0.3);
    assert_eq!(p.points()[7], 0.7);
    Ok(())
}

#[test]
fn single_interval() -> TestResult {
    let p = Partition::uniform(2.0, 5.0, 1)?;
    assert_eq!(p.len(), 1);
    assert_eq!(p.interval(0), (2.0, 5.0));
    Ok(())
}

#[test]
fn explicit_nodes() -> TestResult {
    let p = Partition::new(vec![0.0, 0.1, 0.5, 2.0])?;

    assert_eq!(p.len(), 3);
    let intervals: Vec<(f64, f64)> = p.intervals().collect();
    assert_eq!(intervals, vec![(0.0, 0.1), (0.1, 0.5), (0.5, 2.0)]);
    assert_eq!(p.interval(1), (0.1, 0.5));
    Ok(())
}

#[test]
fn uniform_rejects_zero_intervals() {
    let err = Partition::uniform(0.0, 1.0, 0).unwrap_err();
    assert!(matches!(err, PartitionError::NoIntervals { got: 0 }));
}

#[test]
fn uniform_rejects_reversed_bounds() {
    let err = Partition::uniform(1.0, 0.0, 4).unwrap_err();
    assert!(matches!(err, PartitionError::InvalidBounds { a, b } if a == 1.0 && b == 0.0));

    let err = Partition::uniform(1.0, 1.0, 4).unwrap_err();
    assert!(matches!(err, PartitionError::InvalidBounds { .. }));
}

#[test]
fn uniform_rejects_non_finite_bounds() {
    let err = Partition::uniform(f64::NAN, 1.0, 4).unwrap_err();
    assert!(matches!(err, PartitionError::InvalidBounds { .. }));

    let err = Partition::uniform(0.0, f64::INFINITY, 4).unwrap_err();
    assert!(matches!(err, PartitionError::InvalidBounds { .. }));
}

#[test]
fn rejects_single_node() {
    let err = Partition::new(vec![1.0]).unwrap_err();
    assert!(matches!(err, PartitionError::InsufficientPoints { got: 1 }));

    let err = Partition::new(Vec::new()).unwrap_err();
    assert!(matches!(err, PartitionError::InsufficientPoints { got: 0 }));
}

#[test]
fn rejects_repeated_node() {
    let err = Partition::new(vec![0.0, 1.0, 1.0, 2.0]).unwrap_err();
    assert!(matches!(err, PartitionError::NonIncreasing { idx: 2, .. }));
}

#[test]
fn rejects_decreasing_nodes() {
    let err = Partition::new(vec![0.0, 2.0, 1.0]).unwrap_err();
    assert!(matches!(
        err,
        PartitionError::NonIncreasing { idx: 2, prev, got } if prev == 2.0 && got == 1.0
    ));
}

#[test]
fn rejects_non_finite_node() {
    let err = Partition::new(vec![0.0, f64::NAN, 1.0]).unwrap_err();
    assert!(matches!(err, PartitionError::NonFinite { idx: 1 }));
}
