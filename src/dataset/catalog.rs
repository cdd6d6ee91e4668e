//! Catalog of reference datasets, one per [`DuctShape`].
//!
//! [`Catalog::builtin`] carries the sampled CFD tables for all four
//! shapes. Custom catalogs load from JSON:
//!
//! ```text
//! [
//!   {
//!     "shape": "Circle-Circle",            // id or data key
//!     "bend_angles": [0, 7.5, ...],
//!     "baseline_velocity": 208.0,
//!     "performance": { "Outlet Velocity": [...], ... }
//!   },
//!   ...
//! ]
//! ```


use std::collections::BTreeMap;
use std::io::Read;
use serde::Deserialize;
use crate::dataset::errors::DatasetError;
use crate::dataset::metric::Metric;
use crate::dataset::reference::{deserialize_performance, ReferenceDataset};
use crate::dataset::shape::DuctShape;


/// Bend angles (degrees) at which the built-in tables were sampled.
pub const BEND_ANGLES: [f64; 7] = [0.0, 7.5, 15.0, 22.5, 30.0, 37.5, 45.0];

/// Inlet velocity (m/s) the built-in tables were sampled at.
pub const BASELINE_VELOCITY: f64 = 208.0;


#[derive(Debug, Deserialize)]
struct CatalogEntry {
    shape            : DuctShape,
    bend_angles      : Vec<f64>,
    baseline_velocity: f64,
    #[serde(deserialize_with = "deserialize_performance")]
    performance      : BTreeMap<Metric, Vec<f64>>,
}


#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    datasets: BTreeMap<DuctShape, ReferenceDataset>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { datasets: BTreeMap::new() }
    }

    /// Adds the dataset for `shape`.
    ///
    /// # Errors
    /// - [`DatasetError::DuplicateShape`] if `shape` is already present
    pub fn insert(&mut self, shape: DuctShape, dataset: ReferenceDataset) -> Result<(), DatasetError> {
        if self.datasets.contains_key(&shape) {
            return Err(DatasetError::DuplicateShape(shape));
        }
        self.datasets.insert(shape, dataset);
        Ok(())
    }

    pub fn with(mut self, shape: DuctShape, dataset: ReferenceDataset) -> Result<Self, DatasetError> {
        self.insert(shape, dataset)?;
        Ok(self)
    }

    /// # Errors
    /// - [`DatasetError::MissingShape`] if the catalog has no entry for `shape`
    pub fn get(&self, shape: DuctShape) -> Result<&ReferenceDataset, DatasetError> {
        self.datasets.get(&shape).ok_or(DatasetError::MissingShape(shape))
    }

    /// Shapes present, in canonical order.
    pub fn shapes(&self) -> impl Iterator<Item = DuctShape> + '_ {
        self.datasets.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DuctShape, &ReferenceDataset)> {
        self.datasets.iter().map(|(&s, d)| (s, d))
    }

    pub fn len(&self) -> usize { self.datasets.len() }
    pub fn is_empty(&self) -> bool { self.datasets.is_empty() }

    pub fn from_json_str(s: &str) -> Result<Self, DatasetError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(s)?;
        Self::from_entries(entries)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let entries: Vec<CatalogEntry> = serde_json::from_reader(reader)?;
        Self::from_entries(entries)
    }

    fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, DatasetError> {
        let mut catalog = Self::new();
        for entry in entries {
            let dataset = ReferenceDataset::new(
                entry.bend_angles,
                entry.baseline_velocity,
                entry.performance,
            )?;
            catalog.insert(entry.shape, dataset)?;
        }
        tracing::debug!(shapes = catalog.len(), "loaded reference catalog");
        Ok(catalog)
    }

    /// Sampled tables for all four duct shapes.
    pub fn builtin() -> Self {
        let datasets = DuctShape::ALL
            .into_iter()
            .map(|shape| (shape, builtin_dataset(shape)))
            .collect();
        Self { datasets }
    }
}


fn builtin_dataset(shape: DuctShape) -> ReferenceDataset {
    let [ov, otp, cv, vl, pl] = match shape {
        DuctShape::CircleToCircle => [
            [205.80, 192.33, 178.87, 165.40, 151.93, 138.47, 125.00],
            [100000.0, 85500.0, 71000.0, 56500.0, 42000.0, 27500.0, 13000.0],
            [201.68, 188.49, 175.29, 162.09, 148.89, 135.70, 122.50],
            [0.0, 13.47, 26.93, 40.40, 53.87, 67.33, 80.80],
            [0.0, 14500.0, 29000.0, 43500.0, 58000.0, 72500.0, 87000.0],
        ],
        DuctShape::CircleToSquare => [
            [205.80, 198.00, 190.20, 182.40, 174.60, 166.80, 159.00],
            [100000.0, 95125.0, 90250.0, 85375.0, 80500.0, 75625.0, 70750.0],
            [201.68, 194.04, 186.24, 178.35, 170.61, 163.46, 155.82],
            [0.0, 7.80, 15.60, 23.40, 31.20, 39.00, 46.80],
            [0.0, 4875.0, 9750.0, 14625.0, 19500.0, 24375.0, 29250.0],
        ],
        DuctShape::SquareToSquare => [
            [205.80, 189.67, 173.53, 157.40, 141.27, 125.13, 109.00],
            [100000.0, 83250.0, 66500.0, 49750.0, 33000.0, 16250.0, -500.0],
            [201.68, 185.88, 170.06, 154.25, 138.44, 122.63, 106.82],
            [0.0, 16.13, 32.27, 48.40, 64.53, 80.67, 96.80],
            [0.0, 16750.0, 33500.0, 50250.0, 67000.0, 83750.0, 105000.0],
        ],
        DuctShape::SquareToCircle => [
            [205.80, 193.67, 181.53, 169.40, 157.27, 145.13, 133.00],
            [100000.0, 88750.0, 77500.0, 66250.0, 55000.0, 43750.0, 32500.0],
            [201.68, 189.80, 177.90, 166.01, 154.12, 142.23, 130.34],
            [0.0, 12.13, 24.27, 36.40, 48.53, 60.67, 72.80],
            [0.0, 11250.0, 22500.0, 33750.0, 45000.0, 56250.0, 67500.0],
        ],
    };

    let performance = BTreeMap::from([
        (Metric::OutletVelocity,      ov.to_vec()),
        (Metric::OutletTotalPressure, otp.to_vec()),
        (Metric::CenterlineVelocity,  cv.to_vec()),
        (Metric::VelocityLoss,        vl.to_vec()),
        (Metric::PressureLoss,        pl.to_vec()),
    ]);

    // tables are static and satisfy every dataset invariant
    ReferenceDataset::from_trusted(BEND_ANGLES.to_vec(), BASELINE_VELOCITY, performance)
}
