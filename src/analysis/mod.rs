//! Tabular views over a [`crate::dataset::Catalog`] and report naming.
//!
//! ┌ [`tables::nearest_angle_index`] : snap a continuous angle to a sample
//! ├ [`tables::trend_series`]        : one metric across every bend angle
//! ├ [`tables::comparison_at`]       : every metric at one bend angle
//! ├ [`tables::bar_values`]          : one metric at one bend angle
//! └ [`naming`]                      : report titles and file names

pub mod errors;
pub mod tables;
pub mod naming;

pub use errors::AnalysisError;
pub use naming::{report_file_name, report_title};
pub use tables::{
    bar_values, comparison_at, nearest_angle_index, snap_angle, trend_series,
    ComparisonRow, TrendPoint,
};
