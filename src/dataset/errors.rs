//! Reference dataset errors.
//!
//! ┌ grid / series shape problems  ([`InterpolationError`])
//! ├ dataset-level invariants      (no metrics, bad baseline velocity)
//! ├ naming                        (unknown metric / shape labels)
//! ├ catalog lookups               (missing / duplicate shapes)
//! └ data file parsing             ([`serde_json::Error`])


use thiserror::Error;
use crate::dataset::metric::Metric;
use crate::dataset::shape::DuctShape;
use crate::interpolation::errors::InterpolationError;


#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid bend-angle grid: {0}")]
    Grid(#[from] InterpolationError),

    #[error("dataset carries no performance metrics")]
    NoMetrics,

    #[error("series for {metric} has {got} values, expected {expected}")]
    SeriesLength { metric: Metric, got: usize, expected: usize },

    #[error("series for {metric} has a non-finite value at index {idx}")]
    NonFiniteSeries { metric: Metric, idx: usize },

    #[error("invalid baseline velocity {got}: must be finite and > 0")]
    InvalidBaselineVelocity { got: f64 },

    #[error("unknown metric `{0}`")]
    UnknownMetric(String),

    #[error("unknown duct shape `{0}`")]
    UnknownShape(String),

    #[error("no reference dataset for {0}")]
    MissingShape(DuctShape),

    #[error("duplicate reference dataset for {0}")]
    DuplicateShape(DuctShape),

    #[error("malformed dataset file: {0}")]
    Json(#[from] serde_json::Error),
}
