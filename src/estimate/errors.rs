//! Estimation error types.
//!
//! ┌ [`EstimateError::Dataset`]         : dataset or catalog problem
//! ├ [`EstimateError::OutOfRange`]      : angle outside the sampled grid (reject policy)
//! ├ [`EstimateError::InvalidAngle`]    : non-finite angle
//! ├ [`EstimateError::InvalidVelocity`] : non-finite or non-positive velocity
//! └ configuration errors               : bad exponent / jitter band


use thiserror::Error;
use crate::dataset::errors::DatasetError;


#[derive(Debug, Error)]
pub enum EstimateError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("angle {got} out of sampled range [{min}, {max}]")]
    OutOfRange { got: f64, min: f64, max: f64 },

    #[error("invalid angle {got}: must be finite")]
    InvalidAngle { got: f64 },

    #[error("invalid velocity {got}: must be finite and > 0")]
    InvalidVelocity { got: f64 },

    #[error("invalid velocity exponent {got}: must be finite and > 0")]
    InvalidExponent { got: f64 },

    #[error("invalid jitter band {got}: must be finite and in [0, 1)")]
    InvalidJitterBand { got: f64 },
}
