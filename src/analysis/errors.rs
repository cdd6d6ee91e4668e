use thiserror::Error;
use crate::dataset::errors::DatasetError;
use crate::dataset::shape::DuctShape;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("bend-angle index {index} out of range for {len} samples")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{shape} is sampled on a different bend-angle grid")]
    GridMismatch { shape: DuctShape },
}
