//! External prediction service.
//!
//! The service takes a single operating point and answers with four
//! predicted metrics. Only the payloads and the [`Predictor`] seam live
//! here; transport belongs to the caller. [`LocalPredictor`] answers the
//! same requests from the interpolation engine.

pub mod errors;
pub mod payload;
pub mod local;

pub use errors::PredictorError;
pub use local::LocalPredictor;
pub use payload::{PredictionRequest, PredictionResponse};


/// Source of predictions for a single operating point.
pub trait Predictor {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, PredictorError>;
}
