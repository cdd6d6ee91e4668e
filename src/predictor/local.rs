use crate::dataset::metric::Metric;
use crate::estimate::errors::EstimateError;
use crate::estimate::estimator::{Estimator, Query};
use crate::estimate::report::EstimateReport;
use crate::predictor::errors::PredictorError;
use crate::predictor::payload::{PredictionRequest, PredictionResponse, INLET_PRESSURE_PA};
use crate::predictor::Predictor;


/// [`Predictor`] backed by the interpolation engine.
///
/// Answers in the service's units:
/// ├ velocity loss : % of the straight-duct outlet velocity at the same inlet velocity
/// └ pressure loss : % of the inlet pressure
#[derive(Debug, Clone)]
pub struct LocalPredictor {
    estimator: Estimator,
}

impl LocalPredictor {
    pub fn new(estimator: Estimator) -> Self {
        Self { estimator }
    }

    pub fn estimator(&self) -> &Estimator { &self.estimator }
}

fn require(report: &EstimateReport, metric: Metric) -> Result<f64, PredictorError> {
    report.get(metric).ok_or(PredictorError::MissingMetric(metric))
}

impl Predictor for LocalPredictor {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, PredictorError> {
        let dataset = self
            .estimator
            .catalog()
            .get(request.geometry)
            .map_err(EstimateError::from)?;
        let straight = dataset
            .series(Metric::OutletVelocity)
            .and_then(|s| s.first().copied())
            .ok_or(PredictorError::MissingMetric(Metric::OutletVelocity))?;

        let query  = Query::new(request.geometry, request.angle, request.inlet_velocity);
        let report = self.estimator.estimate(&query)?;

        let reference_velocity = straight * report.velocity_factor;
        let velocity_loss = require(&report, Metric::VelocityLoss)?;
        let pressure_loss = require(&report, Metric::PressureLoss)?;

        Ok(PredictionResponse {
            outlet_velocity: require(&report, Metric::OutletVelocity)?,
            outlet_pressure: require(&report, Metric::OutletTotalPressure)?,
            velocity_loss  : velocity_loss / reference_velocity * 100.0,
            pressure_loss  : pressure_loss / INLET_PRESSURE_PA * 100.0,
        })
    }
}
