//! Estimator configuration.
//!
//! [`EstimatorCfg`]
//! ├ `range_policy`      : clamp or reject angles outside the sampled grid
//! ├ `jitter`            : apply multiplicative measurement noise
//! ├ `jitter_band`       : noise factor drawn from `[1 - band, 1 + band]`
//! └ `velocity_exponent` : exponent of the `(v / v_baseline)` correction
//!
//! [`EstimatorCfg::new`] enables jitter. [`EstimatorCfg::deterministic`]
//! is the same configuration without it.


use serde::Serialize;
use crate::estimate::errors::EstimateError;
use crate::interpolation::RangePolicy;


/// Empirical exponent of the inlet-velocity correction.
pub const VELOCITY_EXPONENT: f64 = 1.2;

/// Half-width of the multiplicative noise band.
pub const JITTER_BAND: f64 = 0.05;

/// Empirical scale applied to the outlet-velocity deficit in the
/// distortion coefficient.
pub const DISTORTION_FACTOR: f64 = 0.8;

/// Standard atmospheric pressure, Pa.
pub const STANDARD_ATMOSPHERE_PA: f64 = 101_325.0;


#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct EstimatorCfg {
    range_policy     : RangePolicy,
    jitter           : bool,
    jitter_band      : f64,
    velocity_exponent: f64,
}

impl EstimatorCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            range_policy     : RangePolicy::Clamp,
            jitter           : true,
            jitter_band      : JITTER_BAND,
            velocity_exponent: VELOCITY_EXPONENT,
        }
    }

    #[must_use]
    pub fn deterministic() -> Self {
        Self::new().set_jitter(false)
    }

    // getters
    #[inline] pub fn range_policy(&self) -> RangePolicy { self.range_policy }
    #[inline] pub fn jitter(&self) -> bool { self.jitter }
    #[inline] pub fn jitter_band(&self) -> f64 { self.jitter_band }
    #[inline] pub fn velocity_exponent(&self) -> f64 { self.velocity_exponent }

    // setters
    pub fn set_range_policy(mut self, v: RangePolicy) -> Self { self.range_policy = v; self }
    pub fn set_jitter(mut self, v: bool) -> Self { self.jitter = v; self }

    pub fn set_jitter_band(mut self, v: f64) -> Result<Self, EstimateError> {
        if !v.is_finite() || !(0.0..1.0).contains(&v) {
            return Err(EstimateError::InvalidJitterBand { got: v });
        }
        self.jitter_band = v;
        Ok(self)
    }

    pub fn set_velocity_exponent(mut self, v: f64) -> Result<Self, EstimateError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(EstimateError::InvalidExponent { got: v });
        }
        self.velocity_exponent = v;
        Ok(self)
    }
}

impl Default for EstimatorCfg {
    fn default() -> Self { Self::new() }
}
