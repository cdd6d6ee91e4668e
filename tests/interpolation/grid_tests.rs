use sduct::interpolation::errors::InterpolationError;
use sduct::interpolation::grid::{validate_grid, validate_series, DEFAULT_X_TOL};

type SductResult = Result<(), InterpolationError>;

#[test]
fn canonical_grid_ok() -> SductResult {
    validate_grid(&[0.0, 7.5, 15.0, 22.5, 30.0, 37.5, 45.0], DEFAULT_X_TOL)?;
    Ok(())
}

#[test]
fn empty_grid_error() {
    let err = validate_grid(&[], DEFAULT_X_TOL).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}

#[test]
fn single_point_error() {
    let err = validate_grid(&[3.0], DEFAULT_X_TOL).unwrap_err();
    assert!(matches!(err, InterpolationError::InsufficientPoints { got: 1 }));
}

#[test]
fn non_finite_grid_error() {
    let err = validate_grid(&[0.0, f64::NAN, 2.0], DEFAULT_X_TOL).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));
}

#[test]
fn decreasing_grid_error() {
    let err = validate_grid(&[0.0, 15.0, 7.5], DEFAULT_X_TOL).unwrap_err();
    assert!(matches!(err, InterpolationError::NonIncreasingX));
}

#[test]
fn duplicate_grid_error() {
    let err = validate_grid(&[0.0, 7.5, 7.5, 15.0], DEFAULT_X_TOL).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));
}

#[test]
fn near_duplicate_grid_error() {
    let err = validate_grid(&[0.0, 1e-13, 1.0], DEFAULT_X_TOL).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));
}

#[test]
fn series_length_mismatch() {
    let err = validate_series(3, &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));
}

#[test]
fn series_non_finite() {
    let err = validate_series(3, &[1.0, 2.0, f64::INFINITY]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 2 }));
}

#[test]
fn messages_name_bend_angles() {
    let err = validate_grid(&[0.0, 7.5, 7.5], DEFAULT_X_TOL).unwrap_err();
    assert_eq!(err.to_string(), "bend angles 7.5 and 7.5 coincide");

    let err = validate_series(3, &[1.0, 2.0]).unwrap_err();
    assert_eq!(err.to_string(), "series length mismatch: 3 bend angles but 2 samples");
}
