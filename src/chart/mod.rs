//! Chart rendering for depth distribution

mod colors;
mod distribution;

pub use distribution::render_distribution_chart;

/// Data for the depth distribution chart
pub struct DistributionChartData {
    /// Feed name shown as the subtitle
    pub source: String,
    /// (legend label, bucket color, event count), shallow to deep
    pub buckets: Vec<(String, &'static str, usize)>,
}

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2400;
pub(super) const CHART_HEIGHT: u32 = 1200;

/// Axis label for a depth bucket (e.g. "10 to 30" -> "10-30 km")
pub(super) fn build_depth_label(label: &str) -> String {
    match label.split_once(" to ") {
        Some((low, high)) => format!("{}-{} km", low, high),
        None => format!("{} km", label),
    }
}
