//! Performance metrics sampled in the reference tables.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize, Serializer};
use crate::dataset::errors::DatasetError;


/// Closed set of performance metrics.
/// - [`Metric::OutletVelocity`]      outlet velocity, m/s
/// - [`Metric::OutletTotalPressure`] outlet total pressure, Pa
/// - [`Metric::CenterlineVelocity`]  centerline velocity, m/s
/// - [`Metric::VelocityLoss`]        velocity deficit against the straight duct, m/s
/// - [`Metric::PressureLoss`]        pressure loss, Pa
///
/// Serialized as its display label (e.g. `"Outlet Velocity"`). Parsing,
/// from text or from a data file, ignores case and surrounding whitespace.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Metric {
    OutletVelocity,
    OutletTotalPressure,
    CenterlineVelocity,
    VelocityLoss,
    PressureLoss,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::OutletVelocity,
        Metric::OutletTotalPressure,
        Metric::CenterlineVelocity,
        Metric::VelocityLoss,
        Metric::PressureLoss,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Metric::OutletVelocity      => "Outlet Velocity",
            Metric::OutletTotalPressure => "Outlet Total Pressure",
            Metric::CenterlineVelocity  => "Centerline Velocity",
            Metric::VelocityLoss        => "Velocity Loss",
            Metric::PressureLoss        => "Pressure Loss",
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Metric::OutletVelocity
            | Metric::CenterlineVelocity
            | Metric::VelocityLoss => "m/s",
            Metric::OutletTotalPressure | Metric::PressureLoss => "Pa",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Metric {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DatasetError::UnknownMetric(s.to_string()))
    }
}

impl TryFrom<String> for Metric {
    type Error = DatasetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
