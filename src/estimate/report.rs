//! Defines the [`EstimateReport`] returned by the estimation engine.
//!
//! The report carries the bracket the query fell into, the velocity
//! correction applied, per-metric values before and after correction,
//! and the derived [`FlowSummary`].

use std::collections::BTreeMap;
use serde::Serialize;
use crate::dataset::metric::Metric;
use crate::dataset::reference::ReferenceDataset;
use crate::estimate::config::{DISTORTION_FACTOR, STANDARD_ATMOSPHERE_PA};
use crate::interpolation::Bracket;


/// Scalar summaries derived from the estimated metrics.
///
/// Each field is `None` when the metric it derives from is absent.
/// - `pressure_drop`           : `|Pressure Loss|`
/// - `total_pressure_recovery` : `Outlet Total Pressure / 101325`
/// - `distortion_coefficient`  : `(max(OV samples) - OV) / max(OV samples) * 0.8`
/// - `flow_uniformity`         : `(1 - Velocity Loss / 100) * 100`, percent
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize)]
pub struct FlowSummary {
    pub pressure_drop          : Option<f64>,
    pub total_pressure_recovery: Option<f64>,
    pub distortion_coefficient : Option<f64>,
    pub flow_uniformity        : Option<f64>,
}

impl FlowSummary {
    pub fn derive(values: &BTreeMap<Metric, f64>, dataset: &ReferenceDataset) -> Self {
        let get = |m: Metric| values.get(&m).copied();

        let distortion_coefficient = match (dataset.max_of(Metric::OutletVelocity), get(Metric::OutletVelocity)) {
            (Some(max_ov), Some(ov)) if max_ov != 0.0 => {
                Some((max_ov - ov) / max_ov * DISTORTION_FACTOR)
            }
            _ => None,
        };

        Self {
            pressure_drop          : get(Metric::PressureLoss).map(f64::abs),
            total_pressure_recovery: get(Metric::OutletTotalPressure).map(|p| p / STANDARD_ATMOSPHERE_PA),
            distortion_coefficient,
            flow_uniformity        : get(Metric::VelocityLoss).map(|vl| (1.0 - vl / 100.0) * 100.0),
        }
    }
}


/// Result of one estimate.
///
/// [`EstimateReport`]
/// - `angle`           : requested bend angle
/// - `velocity`        : requested inlet velocity
/// - `bracket`         : enclosing samples and lerp factor
/// - `velocity_factor` : `(velocity / baseline)^exponent`
/// - `jittered`        : whether noise was applied
/// - `interpolated`    : per-metric lerp, before velocity correction
/// - `values`          : per-metric final estimate
/// - `summary`         : derived scalars, see [`FlowSummary`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateReport {
    pub angle          : f64,
    pub velocity       : f64,
    pub bracket        : Bracket,
    pub velocity_factor: f64,
    pub jittered       : bool,
    pub interpolated   : BTreeMap<Metric, f64>,
    pub values         : BTreeMap<Metric, f64>,
    pub summary        : FlowSummary,
}

impl EstimateReport {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.values.get(&metric).copied()
    }
}
