pub mod config;
pub mod errors;
pub mod jitter;
pub mod report;
pub mod engine;
pub mod estimator;

pub use config::EstimatorCfg;
pub use engine::{estimate, estimate_with_rng};
pub use errors::EstimateError;
pub use estimator::{Estimator, Query};
pub use report::{EstimateReport, FlowSummary};
