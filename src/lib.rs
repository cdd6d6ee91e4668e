//! S-Duct performance estimation.
//!
//! ┌ [`interpolation`] : grid checks, bracket search, linear interpolation
//! ├ [`dataset`]       : metrics, duct shapes, reference tables, catalogs
//! ├ [`estimate`]      : the estimation engine and its configuration
//! ├ [`analysis`]      : trend / comparison tables and report naming
//! └ [`predictor`]     : typed payloads for the external prediction service

pub mod interpolation;
pub mod dataset;
pub mod estimate;
pub mod analysis;
pub mod predictor;
