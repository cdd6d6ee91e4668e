//! Estimation engine.
//!
//! Maps a continuous `(angle, velocity)` query onto estimated metrics
//! from a [`ReferenceDataset`]:
//!
//! ```text
//! bracket  = samples enclosing angle            (range policy at the ends)
//! lerp     = y[lower] + t * (y[upper] - y[lower])
//! estimate = lerp * (velocity / baseline)^exponent * noise
//! ```
//!
//! `noise` is `1` unless jitter is enabled in [`EstimatorCfg`].


use std::collections::BTreeMap;
use rand::Rng;
use crate::dataset::errors::DatasetError;
use crate::dataset::reference::ReferenceDataset;
use crate::estimate::config::EstimatorCfg;
use crate::estimate::errors::EstimateError;
use crate::estimate::jitter::jitter_factor;
use crate::estimate::report::{EstimateReport, FlowSummary};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::linear::eval_bracket;
use crate::interpolation::Bracket;


fn locate(dataset: &ReferenceDataset, angle: f64, cfg: &EstimatorCfg) -> Result<Bracket, EstimateError> {
    Bracket::locate(dataset.bend_angles(), angle, cfg.range_policy()).map_err(|e| match e {
        InterpolationError::OutOfBounds { got, x_min, x_max } => {
            EstimateError::OutOfRange { got, min: x_min, max: x_max }
        }
        InterpolationError::NonFiniteQuery { got } => EstimateError::InvalidAngle { got },
        other => EstimateError::Dataset(DatasetError::Grid(other)),
    })
}

/// Estimates every metric of `dataset` at `(angle, velocity)`.
///
/// Draws noise from the thread-local generator when jitter is enabled.
/// See [`estimate_with_rng`] for the full contract.
pub fn estimate(
    dataset: &ReferenceDataset,
    angle: f64,
    velocity: f64,
    cfg: &EstimatorCfg,
) -> Result<EstimateReport, EstimateError> {
    estimate_with_rng(dataset, angle, velocity, cfg, &mut rand::thread_rng())
}

/// Estimates every metric of `dataset` at `(angle, velocity)`, drawing
/// noise from `rng`.
///
/// # Behavior
/// - Finds the bracket of `angle` on `dataset.bend_angles()`. An exact hit
///   uses the sample as is; an angle outside the grid is clamped to the
///   nearest end sample or rejected per `cfg.range_policy()`.
/// - Interpolates each metric linearly inside the bracket.
/// - Scales by `(velocity / baseline_velocity)^cfg.velocity_exponent()`.
/// - If `cfg.jitter()`, multiplies each metric by its own factor in
///   `[1 - band, 1 + band]`. `rng` is untouched otherwise.
///
/// # Returns
/// [`EstimateReport`] with a value for every metric in the dataset.
///
/// # Errors
/// - [`EstimateError::InvalidVelocity`] if `velocity` is non-finite or <= 0
/// - [`EstimateError::InvalidAngle`] if `angle` is non-finite
/// - [`EstimateError::OutOfRange`] if `angle` is outside the grid under
///   [`crate::interpolation::RangePolicy::Reject`]
pub fn estimate_with_rng<R: Rng + ?Sized>(
    dataset: &ReferenceDataset,
    angle: f64,
    velocity: f64,
    cfg: &EstimatorCfg,
    rng: &mut R,
) -> Result<EstimateReport, EstimateError> {
    if !velocity.is_finite() || velocity <= 0.0 {
        return Err(EstimateError::InvalidVelocity { got: velocity });
    }

    let bracket = locate(dataset, angle, cfg)?;
    if bracket.clamped {
        let (min, max) = dataset.angle_range();
        tracing::warn!(angle, min, max, "angle outside sampled range, clamped to nearest sample");
    }

    let velocity_factor = (velocity / dataset.baseline_velocity()).powf(cfg.velocity_exponent());

    let mut interpolated = BTreeMap::new();
    let mut values       = BTreeMap::new();
    for (&metric, series) in dataset.performance() {
        let base = eval_bracket(&bracket, series).map_err(DatasetError::Grid)?;

        let mut value = base * velocity_factor;
        if cfg.jitter() {
            value *= jitter_factor(rng, cfg.jitter_band());
        }

        interpolated.insert(metric, base);
        values.insert(metric, value);
    }

    let summary = FlowSummary::derive(&values, dataset);

    tracing::debug!(
        angle,
        velocity,
        lower = bracket.lower,
        upper = bracket.upper,
        t = bracket.t,
        velocity_factor,
        metrics = values.len(),
        "estimated duct performance"
    );

    Ok(EstimateReport {
        angle,
        velocity,
        bracket,
        velocity_factor,
        jittered: cfg.jitter(),
        interpolated,
        values,
        summary,
    })
}
