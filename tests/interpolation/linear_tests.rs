use sduct::interpolation::errors::InterpolationError;
use sduct::interpolation::linear::{eval_bracket, interpolate, lerp};
use sduct::interpolation::{Bracket, RangePolicy};

type SductResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(100.0, 80.0, 0.0), 100.0);
    assert_eq!(lerp(100.0, 80.0, 1.0), 80.0);
    assert_eq!(lerp(100.0, 80.0, 0.5), 90.0);
}

#[test]
fn exact_hits_return_samples() -> SductResult {
    let x = [0.0, 15.0, 30.0];
    let y = [100.0, 80.0, 50.0];
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        assert_eq!(interpolate(&x, &y, xi, RangePolicy::Reject)?, yi);
    }
    Ok(())
}

#[test]
fn midpoints() -> SductResult {
    let x = [0.0, 15.0, 30.0];
    let y = [100.0, 80.0, 50.0];
    assert_eq!(interpolate(&x, &y, 7.5, RangePolicy::Reject)?, 90.0);
    assert_eq!(interpolate(&x, &y, 22.5, RangePolicy::Reject)?, 65.0);
    Ok(())
}

#[test]
fn linear_function_reproduced() -> SductResult {
    // y = 3x - 1
    let x = [-2.0, 0.0, 0.3, 1.7, 4.2];
    let y: Vec<f64> = x.iter().map(|&xi| 3.0 * xi - 1.0).collect();
    for xq in [-2.0, -1.0, 0.0, 0.3, 1.0, 1.7, 3.0, 4.2] {
        let yq = interpolate(&x, &y, xq, RangePolicy::Reject)?;
        assert!(approx_eq(yq, 3.0 * xq - 1.0), "xq={xq}: got {yq}");
    }
    Ok(())
}

#[test]
fn value_stays_between_bracketing_samples() -> SductResult {
    let x = [0.0, 7.5, 15.0, 22.5, 30.0, 37.5, 45.0];
    let y = [205.80, 192.33, 178.87, 165.40, 151.93, 138.47, 125.00];
    let mut xq = 0.1;
    while xq < 45.0 {
        let b  = Bracket::locate(&x, xq, RangePolicy::Reject)?;
        let yq = eval_bracket(&b, &y)?;
        let (lo, hi) = (y[b.lower].min(y[b.upper]), y[b.lower].max(y[b.upper]));
        assert!(lo <= yq && yq <= hi, "xq={xq}: {yq} not in [{lo}, {hi}]");
        xq += 0.7;
    }
    Ok(())
}

#[test]
fn clamp_returns_end_samples() -> SductResult {
    let x = [0.0, 15.0, 30.0];
    let y = [100.0, 80.0, 50.0];
    assert_eq!(interpolate(&x, &y, -3.0, RangePolicy::Clamp)?, 100.0);
    assert_eq!(interpolate(&x, &y, 99.0, RangePolicy::Clamp)?, 50.0);
    Ok(())
}

#[test]
fn short_series_error() -> SductResult {
    let x = [0.0, 15.0, 30.0];
    let b = Bracket::locate(&x, 20.0, RangePolicy::Reject)?;
    let err = eval_bracket(&b, &[1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { .. }));
    Ok(())
}

#[test]
fn unequal_length_error() {
    let err = interpolate(&[0.0, 1.0, 2.0], &[1.0, 2.0], 0.5, RangePolicy::Clamp).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));
}
