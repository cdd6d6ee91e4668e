use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::dataset::catalog::Catalog;
use crate::dataset::shape::DuctShape;
use crate::estimate::config::EstimatorCfg;
use crate::estimate::engine::{estimate, estimate_with_rng};
use crate::estimate::errors::EstimateError;
use crate::estimate::report::EstimateReport;


/// One estimation request: duct shape, bend angle (degrees), inlet velocity (m/s).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub shape   : DuctShape,
    pub angle   : f64,
    pub velocity: f64,
}

impl Query {
    pub fn new(shape: DuctShape, angle: f64, velocity: f64) -> Self {
        Self { shape, angle, velocity }
    }
}


/// Answers [`Query`] values against a fixed [`Catalog`].
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone)]
pub struct Estimator {
    catalog: Catalog,
    cfg    : EstimatorCfg,
}

impl Estimator {
    pub fn new(catalog: Catalog, cfg: EstimatorCfg) -> Self {
        Self { catalog, cfg }
    }

    /// Built-in tables with the default configuration.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin(), EstimatorCfg::new())
    }

    pub fn catalog(&self) -> &Catalog { &self.catalog }
    pub fn cfg(&self) -> &EstimatorCfg { &self.cfg }

    pub fn estimate(&self, query: &Query) -> Result<EstimateReport, EstimateError> {
        let dataset = self.catalog.get(query.shape)?;
        estimate(dataset, query.angle, query.velocity, &self.cfg)
    }

    pub fn estimate_with_rng<R: Rng + ?Sized>(
        &self,
        query: &Query,
        rng: &mut R,
    ) -> Result<EstimateReport, EstimateError> {
        let dataset = self.catalog.get(query.shape)?;
        estimate_with_rng(dataset, query.angle, query.velocity, &self.cfg, rng)
    }
}
