//! Errors raised while checking a bend-angle grid or locating an angle on it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("series length mismatch: {x_len} bend angles but {y_len} samples")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("bend angle or sample at index {idx} is NaN or infinite")]
    NonFiniteVec { idx: usize },

    #[error("no bend angles sampled")]
    EmptyInput,

    #[error("{got} bend angle(s) sampled, interpolation needs at least 2")]
    InsufficientPoints { got: usize },

    #[error("bend angles {x1} and {x2} coincide")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("bend angles must be listed in increasing order")]
    NonIncreasingX,

    #[error("bend angle {got} lies outside the sampled range [{x_min}, {x_max}]")]
    OutOfBounds { got: f64, x_min: f64, x_max: f64 },

    #[error("bend angle must be a finite number, got {got}")]
    NonFiniteQuery { got: f64 },
}
