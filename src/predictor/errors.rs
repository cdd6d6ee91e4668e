use thiserror::Error;
use crate::dataset::metric::Metric;
use crate::estimate::errors::EstimateError;

#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("angle {got} outside accepted range [{min}, {max}]")]
    AngleOutOfRange { got: f64, min: f64, max: f64 },

    #[error("inlet velocity {got} m/s outside accepted range [{min}, {max}]")]
    VelocityOutOfRange { got: f64, min: f64, max: f64 },

    #[error("prediction service error: {message}")]
    Remote { message: String, trace: Option<String> },

    #[error("malformed prediction payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("local estimate lacks {0}")]
    MissingMetric(Metric),

    #[error(transparent)]
    Estimate(#[from] EstimateError),
}
