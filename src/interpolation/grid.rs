//! Validation of sample grids and the series laid over them.
//!
//! A grid is the ordered set of abscissae (bend angles) at which samples
//! exist. A series is one value per grid entry.
//!
//! [`validate_grid`]
//! ├ non-empty, at least 2 points
//! ├ every value finite
//! └ strictly increasing, adjacent spacing >= `min_spacing`
//!
//! [`validate_series`]
//! ├ non-empty
//! ├ every value finite
//! └ same length as the grid


use crate::interpolation::errors::InterpolationError;

/// Minimum allowed spacing between adjacent grid values.
pub const DEFAULT_X_TOL: f64 = 1e-12;


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

pub fn validate_grid(x: &[f64], min_spacing: f64) -> Result<(), InterpolationError> {
    if x.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if let Some(idx) = non_finite_idx(x) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    if x.len() < 2 {
        return Err(InterpolationError::InsufficientPoints { got: x.len() });
    }
    for i in 1..x.len() {
        if (x[i] - x[i - 1]).abs() < min_spacing {
            return Err(InterpolationError::DuplicateX {
                x1: x[i - 1],
                x2: x[i],
            });
        }
        if x[i] <= x[i - 1] {
            return Err(InterpolationError::NonIncreasingX);
        }
    }
    Ok(())
}

pub fn validate_series(x_len: usize, y: &[f64]) -> Result<(), InterpolationError> {
    if y.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if let Some(idx) = non_finite_idx(y) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    if y.len() != x_len {
        return Err(InterpolationError::UnequalLength { x_len, y_len: y.len() });
    }
    Ok(())
}
