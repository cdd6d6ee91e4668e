//! Reference dataset for a single duct shape.
//!
//! [`ReferenceDataset`], immutable once built
//! - `bend_angles`       : strictly increasing sample angles (degrees)
//! - `baseline_velocity` : inlet velocity the samples were taken at
//! - `performance`       : one series per [`Metric`], index-aligned with `bend_angles`
//!
//! Every construction path, including deserialization, goes through
//! [`ReferenceDataset::new`] and its checks.


use std::collections::BTreeMap;
use std::fmt;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use crate::dataset::errors::DatasetError;
use crate::dataset::metric::Metric;
use crate::interpolation::grid::{non_finite_idx, validate_grid, DEFAULT_X_TOL};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct ReferenceDataset {
    bend_angles      : Vec<f64>,
    baseline_velocity: f64,
    performance      : BTreeMap<Metric, Vec<f64>>,
}

/// Unchecked wire form of [`ReferenceDataset`].
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct RawDataset {
    bend_angles      : Vec<f64>,
    baseline_velocity: f64,
    #[serde(deserialize_with = "deserialize_performance")]
    performance      : BTreeMap<Metric, Vec<f64>>,
}

/// Reads a `{ metric: series }` map, rejecting a metric named twice,
/// whatever the spelling.
pub(crate) fn deserialize_performance<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<Metric, Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PerformanceVisitor;

    impl<'de> Visitor<'de> for PerformanceVisitor {
        type Value = BTreeMap<Metric, Vec<f64>>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from metric label to series")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut performance = BTreeMap::new();
            while let Some((metric, series)) = map.next_entry::<Metric, Vec<f64>>()? {
                if performance.insert(metric, series).is_some() {
                    return Err(de::Error::custom(format!("duplicate metric `{metric}`")));
                }
            }
            Ok(performance)
        }
    }

    deserializer.deserialize_map(PerformanceVisitor)
}

impl TryFrom<RawDataset> for ReferenceDataset {
    type Error = DatasetError;

    fn try_from(raw: RawDataset) -> Result<Self, Self::Error> {
        ReferenceDataset::new(raw.bend_angles, raw.baseline_velocity, raw.performance)
    }
}

impl ReferenceDataset {
    /// Builds a dataset, checking every invariant.
    ///
    /// # Errors
    /// - [`DatasetError::Grid`] if `bend_angles` is empty, has fewer than 2
    ///   entries, is non-finite, unsorted, or has duplicates
    /// - [`DatasetError::InvalidBaselineVelocity`] unless `baseline_velocity`
    ///   is finite and > 0
    /// - [`DatasetError::NoMetrics`] if `performance` is empty
    /// - [`DatasetError::SeriesLength`] if a series is not index-aligned
    /// - [`DatasetError::NonFiniteSeries`] if a series holds NaN / inf
    pub fn new(
        bend_angles: Vec<f64>,
        baseline_velocity: f64,
        performance: BTreeMap<Metric, Vec<f64>>,
    ) -> Result<Self, DatasetError> {
        validate_grid(&bend_angles, DEFAULT_X_TOL)?;

        if !baseline_velocity.is_finite() || baseline_velocity <= 0.0 {
            return Err(DatasetError::InvalidBaselineVelocity { got: baseline_velocity });
        }
        if performance.is_empty() {
            return Err(DatasetError::NoMetrics);
        }

        let expected = bend_angles.len();
        for (&metric, series) in &performance {
            if series.len() != expected {
                return Err(DatasetError::SeriesLength { metric, got: series.len(), expected });
            }
            if let Some(idx) = non_finite_idx(series) {
                return Err(DatasetError::NonFiniteSeries { metric, idx });
            }
        }

        Ok(Self { bend_angles, baseline_velocity, performance })
    }

    /// Skips validation for compiled-in tables.
    pub(crate) fn from_trusted(
        bend_angles: Vec<f64>,
        baseline_velocity: f64,
        performance: BTreeMap<Metric, Vec<f64>>,
    ) -> Self {
        debug_assert!(validate_grid(&bend_angles, DEFAULT_X_TOL).is_ok());
        debug_assert!(performance.values().all(|s| s.len() == bend_angles.len()));
        Self { bend_angles, baseline_velocity, performance }
    }

    /// Convenience constructor from `(metric, series)` pairs.
    pub fn from_series<I>(
        bend_angles: &[f64],
        baseline_velocity: f64,
        series: I,
    ) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (Metric, Vec<f64>)>,
    {
        Self::new(bend_angles.to_vec(), baseline_velocity, series.into_iter().collect())
    }

    // getters
    pub fn bend_angles(&self) -> &[f64] { &self.bend_angles }
    pub fn baseline_velocity(&self) -> f64 { self.baseline_velocity }
    pub fn performance(&self) -> &BTreeMap<Metric, Vec<f64>> { &self.performance }
    pub fn len(&self) -> usize { self.bend_angles.len() }
    pub fn is_empty(&self) -> bool { self.bend_angles.is_empty() }

    pub fn series(&self, metric: Metric) -> Option<&[f64]> {
        self.performance.get(&metric).map(Vec::as_slice)
    }

    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.performance.keys().copied()
    }

    pub fn angle_range(&self) -> (f64, f64) {
        (self.bend_angles[0], self.bend_angles[self.bend_angles.len() - 1])
    }

    /// Largest sample of `metric`, if the dataset carries it.
    pub fn max_of(&self, metric: Metric) -> Option<f64> {
        self.series(metric)
            .map(|s| s.iter().copied().fold(f64::NEG_INFINITY, f64::max))
    }
}
