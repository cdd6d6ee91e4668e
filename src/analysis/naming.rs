use crate::dataset::metric::Metric;

/// `"S-Duct Performance Analysis - Outlet Velocity at 15°"`
pub fn report_title(angle: f64, metric: Metric) -> String {
    format!("S-Duct Performance Analysis - {} at {}°", metric.label(), angle)
}

/// `"s-duct-analysis-15deg-outlet-velocity.pdf"`
pub fn report_file_name(angle: f64, metric: Metric) -> String {
    let slug = metric
        .label()
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    format!("s-duct-analysis-{}deg-{}.pdf", angle, slug)
}
