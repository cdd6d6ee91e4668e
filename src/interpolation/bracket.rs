//! Bracket search over a sorted grid.
//!
//! A [`Bracket`] names the two grid samples enclosing a query point and
//! the fractional position `t` of the query between them.
//!
//! ```text
//! x[lower] <= xq <= x[upper]
//! t = (xq - x[lower]) / (x[upper] - x[lower])      (0 when lower == upper)
//! ```
//!
//! Queries outside `[x[0], x[n-1]]` are handled per [`RangePolicy`].


use std::cmp::Ordering;
use serde::Serialize;
use crate::interpolation::errors::InterpolationError;


/// What to do with a query point outside the sampled range.
/// - [`RangePolicy::Clamp`]  fall back to the nearest end sample
/// - [`RangePolicy::Reject`] return [`InterpolationError::OutOfBounds`]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    #[default]
    Clamp,
    Reject,
}


/// Enclosing samples of a query point.
///
/// [`Bracket`]
/// - `lower`   : index of the greatest sample `<= xq`
/// - `upper`   : index of the least sample `>= xq`
/// - `t`       : position of `xq` in `[x[lower], x[upper]]`, in `[0, 1]`
/// - `clamped` : `xq` was outside the grid and snapped to an end sample
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Bracket {
    pub lower  : usize,
    pub upper  : usize,
    pub t      : f64,
    pub clamped: bool,
}

impl Bracket {
    fn exact(idx: usize) -> Self {
        Self { lower: idx, upper: idx, t: 0.0, clamped: false }
    }

    fn clamp_to(idx: usize) -> Self {
        Self { lower: idx, upper: idx, t: 0.0, clamped: true }
    }

    /// `true` when the query sits exactly on a sample (or was clamped to one).
    pub fn is_exact(&self) -> bool {
        self.lower == self.upper
    }

    /// Locates `xq` on the grid `x`.
    ///
    /// `x` must already be validated (see [`crate::interpolation::grid::validate_grid`]).
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if `x` is empty
    /// - [`InterpolationError::NonFiniteQuery`] if `xq` is NaN or infinite
    /// - [`InterpolationError::OutOfBounds`] if `xq` is outside the grid and
    ///   `policy` is [`RangePolicy::Reject`]
    pub fn locate(x: &[f64], xq: f64, policy: RangePolicy) -> Result<Self, InterpolationError> {
        if x.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if !xq.is_finite() {
            return Err(InterpolationError::NonFiniteQuery { got: xq });
        }

        let last  = x.len() - 1;
        let x_min = x[0];
        let x_max = x[last];

        // domain check
        if xq < x_min || xq > x_max {
            return match policy {
                RangePolicy::Reject => Err(InterpolationError::OutOfBounds {
                    got: xq,
                    x_min,
                    x_max,
                }),
                RangePolicy::Clamp if xq < x_min => Ok(Self::clamp_to(0)),
                RangePolicy::Clamp               => Ok(Self::clamp_to(last)),
            };
        }

        match x.binary_search_by(
            |xi| {
                if *xi < xq      { Ordering::Less    }
                else if *xi > xq { Ordering::Greater }
                else             { Ordering::Equal   }
            }
        ) {
            Ok(idx)  => Ok(Self::exact(idx)),
            Err(idx) => {
                // x[idx - 1] < xq < x[idx]
                let lower = idx - 1;
                let upper = idx;
                let t = (xq - x[lower]) / (x[upper] - x[lower]);
                Ok(Self { lower, upper, t, clamped: false })
            }
        }
    }
}
