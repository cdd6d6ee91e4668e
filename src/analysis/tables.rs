use std::collections::BTreeMap;
use serde::Serialize;
use crate::analysis::errors::AnalysisError;
use crate::dataset::catalog::Catalog;
use crate::dataset::metric::Metric;
use crate::dataset::shape::DuctShape;


/// Values of one metric for every shape at a single bend angle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub angle : f64,
    pub values: BTreeMap<DuctShape, f64>,
}

/// Values of one metric for every shape at the selected bend angle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub metric: Metric,
    pub values: BTreeMap<DuctShape, f64>,
}


/// Index of the sample closest to `target`. Ties go to the lower index.
///
/// Returns `None` for an empty grid.
pub fn nearest_angle_index(angles: &[f64], target: f64) -> Option<usize> {
    if angles.is_empty() {
        return None;
    }
    let idx = (1..angles.len()).fold(0, |best, i| {
        if (angles[i] - target).abs() < (angles[best] - target).abs() { i } else { best }
    });
    Some(idx)
}

/// The sample closest to `target`.
pub fn snap_angle(angles: &[f64], target: f64) -> Option<f64> {
    nearest_angle_index(angles, target).map(|i| angles[i])
}


/// Shared bend-angle grid of the catalog, checked across shapes.
fn shared_grid(catalog: &Catalog) -> Result<Option<&[f64]>, AnalysisError> {
    let mut grid: Option<&[f64]> = None;
    for (shape, dataset) in catalog.iter() {
        match grid {
            None => grid = Some(dataset.bend_angles()),
            Some(g) if g != dataset.bend_angles() => {
                return Err(AnalysisError::GridMismatch { shape });
            }
            Some(_) => {}
        }
    }
    Ok(grid)
}

fn check_index(index: usize, len: usize) -> Result<(), AnalysisError> {
    if index >= len {
        return Err(AnalysisError::IndexOutOfRange { index, len });
    }
    Ok(())
}


/// `metric` across every bend angle, one column per shape carrying it.
///
/// # Errors
/// - [`AnalysisError::GridMismatch`] if the shapes are sampled on different grids
pub fn trend_series(catalog: &Catalog, metric: Metric) -> Result<Vec<TrendPoint>, AnalysisError> {
    let Some(grid) = shared_grid(catalog)? else {
        return Ok(Vec::new());
    };

    let points = grid
        .iter()
        .enumerate()
        .map(|(idx, &angle)| {
            let values = catalog
                .iter()
                .filter_map(|(shape, d)| d.series(metric).map(|s| (shape, s[idx])))
                .collect();
            TrendPoint { angle, values }
        })
        .collect();
    Ok(points)
}

/// Every metric at bend-angle `index`, one column per shape.
///
/// Metrics no shape carries are left out.
///
/// # Errors
/// - [`AnalysisError::GridMismatch`] if the shapes are sampled on different grids
/// - [`AnalysisError::IndexOutOfRange`] if `index` is past the grid
pub fn comparison_at(catalog: &Catalog, index: usize) -> Result<Vec<ComparisonRow>, AnalysisError> {
    let Some(grid) = shared_grid(catalog)? else {
        return Ok(Vec::new());
    };
    check_index(index, grid.len())?;

    let rows = Metric::ALL
        .into_iter()
        .map(|metric| {
            let values: BTreeMap<DuctShape, f64> = catalog
                .iter()
                .filter_map(|(shape, d)| d.series(metric).map(|s| (shape, s[index])))
                .collect();
            ComparisonRow { metric, values }
        })
        .filter(|row| !row.values.is_empty())
        .collect();
    Ok(rows)
}

/// `(shape, value)` of `metric` at bend-angle `index`, per shape carrying it.
///
/// # Errors
/// - [`AnalysisError::IndexOutOfRange`] if `index` is past a shape's grid
pub fn bar_values(
    catalog: &Catalog,
    metric: Metric,
    index: usize,
) -> Result<Vec<(DuctShape, f64)>, AnalysisError> {
    let mut bars = Vec::with_capacity(catalog.len());
    for (shape, dataset) in catalog.iter() {
        if let Some(series) = dataset.series(metric) {
            check_index(index, series.len())?;
            bars.push((shape, series[index]));
        }
    }
    Ok(bars)
}
