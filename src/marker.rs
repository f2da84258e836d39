//! Earthquake record to map marker conversion

use serde::Serialize;

use crate::depth::classify;
use crate::feed::EarthquakeRecord;

/// Marker radius in pixels per unit of magnitude
pub(crate) const RADIUS_PER_MAGNITUDE: f64 = 5.0;

const STROKE_COLOR: &str = "#000";

/// Style and content for one circle marker. Field names follow Leaflet's
/// `circleMarker` options so the struct serializes straight into the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct MarkerDescriptor {
    /// (lat, lon)
    pub(crate) position: (f64, f64),
    pub(crate) radius: f64,
    #[serde(rename = "fillColor")]
    pub(crate) fill_color: &'static str,
    #[serde(rename = "color")]
    pub(crate) stroke_color: &'static str,
    #[serde(rename = "weight")]
    pub(crate) stroke_weight: f64,
    pub(crate) opacity: f64,
    #[serde(rename = "fillOpacity")]
    pub(crate) fill_opacity: f64,
    #[serde(rename = "popup")]
    pub(crate) popup_html: String,
}

pub(crate) fn to_marker(record: &EarthquakeRecord) -> MarkerDescriptor {
    MarkerDescriptor {
        position: (record.latitude, record.longitude),
        radius: record.magnitude * RADIUS_PER_MAGNITUDE,
        fill_color: classify(record.depth).color(),
        stroke_color: STROKE_COLOR,
        stroke_weight: 1.0,
        opacity: 1.0,
        fill_opacity: 0.8,
        popup_html: popup_html(record),
    }
}

fn popup_html(record: &EarthquakeRecord) -> String {
    format!(
        "<h1>{}</h1> <hr> <h3>Magnitude: {}</h3> <h3>Depth: {}</h3>",
        escape_html(&record.title),
        record.magnitude,
        record.depth
    )
}

/// Escape text for use inside HTML element content or attribute values
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
