pub mod errors;
pub mod metric;
pub mod shape;
pub mod reference;
pub mod catalog;

pub use catalog::{Catalog, BASELINE_VELOCITY, BEND_ANGLES};
pub use errors::DatasetError;
pub use metric::Metric;
pub use reference::ReferenceDataset;
pub use shape::DuctShape;
