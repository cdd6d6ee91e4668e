//! Linear Interpolation
//!
//! Implements piecewise-[linear interpolation](https://en.wikipedia.org/wiki/Linear_interpolation)
//! on a [`Bracket`].
//!
//! Each consecutive pair `(x[i], y[i])`, `(x[i+1], y[i+1])` defines
//! a line segment. A query lying within `[x[i], x[i+1]]` is interpolated
//! linearly between the two end points.


use crate::interpolation::bracket::{Bracket, RangePolicy};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::grid::{validate_grid, validate_series, DEFAULT_X_TOL};


#[inline]
pub fn lerp(y0: f64, y1: f64, t: f64) -> f64 {
    y0 + t * (y1 - y0)
}

/// Evaluates the series `y` at a bracket found on the same grid.
///
/// ```text
/// yq = y[lower] + t * (y[upper] - y[lower])
/// ```
///
/// An exact bracket returns `y[lower]` untouched.
///
/// # Errors
/// - [`InterpolationError::UnequalLength`] if the bracket indexes past `y`.
#[inline]
pub fn eval_bracket(bracket: &Bracket, y: &[f64]) -> Result<f64, InterpolationError> {
    if bracket.upper >= y.len() {
        return Err(InterpolationError::UnequalLength {
            x_len: bracket.upper + 1,
            y_len: y.len(),
        });
    }
    if bracket.is_exact() {
        return Ok(y[bracket.lower]);
    }
    Ok(lerp(y[bracket.lower], y[bracket.upper], bracket.t))
}

/// Validates `(x, y)` then interpolates at `xq`.
///
/// # Errors
/// - grid and series errors from [`validate_grid`] / [`validate_series`]
/// - [`InterpolationError::OutOfBounds`] under [`RangePolicy::Reject`]
pub fn interpolate(
    x: &[f64],
    y: &[f64],
    xq: f64,
    policy: RangePolicy,
) -> Result<f64, InterpolationError> {
    validate_grid(x, DEFAULT_X_TOL)?;
    validate_series(x.len(), y)?;

    let bracket = Bracket::locate(x, xq, policy)?;
    eval_bracket(&bracket, y)
}
