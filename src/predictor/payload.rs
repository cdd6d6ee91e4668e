//! Wire payloads of the prediction service.
//!
//! Request
//! ├ "Mach Number"          : `velocity / 343`
//! ├ "Angle"                : bend angle, degrees, in `[0, 45]`
//! ├ "Inlet Velocity (m/s)" : in `[68, 275]`
//! ├ "Inlet Pressure (Pa)"  : fixed at `1e5`
//! └ "Geometry"             : duct shape id, e.g. `"Circle-Circle"`
//!
//! Response
//! ├ "Outlet Velocity (m/s)", "Outlet Pressure (Pa)",
//! ├ "Velocity Loss (%)", "Pressure Loss (%)"
//! └ or `{ "error": .., "trace": .. }` on failure


use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::dataset::shape::DuctShape;
use crate::predictor::errors::PredictorError;


/// Speed of sound used for the Mach number, m/s.
pub const SPEED_OF_SOUND: f64 = 343.0;

/// Inlet static pressure sent with every request, Pa.
pub const INLET_PRESSURE_PA: f64 = 1.0e5;

pub const MIN_ANGLE: f64 = 0.0;
pub const MAX_ANGLE: f64 = 45.0;
pub const MIN_VELOCITY: f64 = 68.0;
pub const MAX_VELOCITY: f64 = 275.0;


#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(rename = "Mach Number")]
    pub mach_number: f64,
    #[serde(rename = "Angle")]
    pub angle: f64,
    #[serde(rename = "Inlet Velocity (m/s)")]
    pub inlet_velocity: f64,
    #[serde(rename = "Inlet Pressure (Pa)")]
    pub inlet_pressure: f64,
    #[serde(rename = "Geometry")]
    pub geometry: DuctShape,
}

impl PredictionRequest {
    /// # Errors
    /// - [`PredictorError::AngleOutOfRange`] unless `angle` is in `[0, 45]`
    /// - [`PredictorError::VelocityOutOfRange`] unless `velocity` is in `[68, 275]`
    pub fn new(angle: f64, velocity: f64, geometry: DuctShape) -> Result<Self, PredictorError> {
        if !(MIN_ANGLE..=MAX_ANGLE).contains(&angle) {
            return Err(PredictorError::AngleOutOfRange { got: angle, min: MIN_ANGLE, max: MAX_ANGLE });
        }
        if !(MIN_VELOCITY..=MAX_VELOCITY).contains(&velocity) {
            return Err(PredictorError::VelocityOutOfRange {
                got: velocity,
                min: MIN_VELOCITY,
                max: MAX_VELOCITY,
            });
        }

        Ok(Self {
            mach_number   : velocity / SPEED_OF_SOUND,
            angle,
            inlet_velocity: velocity,
            inlet_pressure: INLET_PRESSURE_PA,
            geometry,
        })
    }

    pub fn to_json(&self) -> Result<String, PredictorError> {
        Ok(serde_json::to_string(self)?)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(rename = "Outlet Velocity (m/s)")]
    pub outlet_velocity: f64,
    #[serde(rename = "Outlet Pressure (Pa)")]
    pub outlet_pressure: f64,
    #[serde(rename = "Velocity Loss (%)")]
    pub velocity_loss: f64,
    #[serde(rename = "Pressure Loss (%)")]
    pub pressure_loss: f64,
}

impl PredictionResponse {
    /// Parses a service body, turning an error body into [`PredictorError::Remote`].
    pub fn from_json(body: &str) -> Result<Self, PredictorError> {
        let value: Value = serde_json::from_str(body)?;

        if let Some(err) = value.get("error") {
            let message = match err {
                Value::String(s) => s.clone(),
                other            => other.to_string(),
            };
            let trace = value
                .get("trace")
                .and_then(Value::as_str)
                .map(str::to_string);
            return Err(PredictorError::Remote { message, trace });
        }

        Ok(serde_json::from_value(value)?)
    }
}
