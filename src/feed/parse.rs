//! GeoJSON feed decoding

use serde::Deserialize;
use serde_json::Value;

use super::{EarthquakeRecord, FeedError};

#[derive(Deserialize)]
struct FeedDto {
    features: Vec<FeatureDto>,
}

#[derive(Deserialize)]
struct FeatureDto {
    geometry: Option<GeometryDto>,
    #[serde(default)]
    properties: Option<PropertiesDto>,
}

#[derive(Deserialize)]
struct GeometryDto {
    coordinates: Option<Vec<f64>>,
}

#[derive(Deserialize)]
struct PropertiesDto {
    mag: Option<f64>,
    title: Option<String>,
}

/// Decode a USGS summary feed into records.
///
/// Every feature must carry `[lon, lat, depth]` coordinates; one bad feature
/// rejects the whole feed. A null or missing `mag` reads as 0 and a missing
/// `title` as an empty string.
pub(crate) fn parse_earthquakes(
    origin: &str,
    document: Value,
) -> Result<Vec<EarthquakeRecord>, FeedError> {
    let feed: FeedDto =
        serde_json::from_value(document).map_err(|e| FeedError::parse(origin, e.to_string()))?;

    feed.features
        .into_iter()
        .enumerate()
        .map(|(i, feature)| {
            let coords = feature
                .geometry
                .and_then(|g| g.coordinates)
                .ok_or_else(|| {
                    FeedError::parse(origin, format!("feature {} has no coordinates", i))
                })?;
            let &[longitude, latitude, depth, ..] = coords.as_slice() else {
                return Err(FeedError::parse(
                    origin,
                    format!(
                        "feature {} has {} coordinates, expected [lon, lat, depth]",
                        i,
                        coords.len()
                    ),
                ));
            };
            let (magnitude, title) = match feature.properties {
                Some(p) => (p.mag.unwrap_or(0.0), p.title.unwrap_or_default()),
                None => (0.0, String::new()),
            };
            Ok(EarthquakeRecord {
                longitude,
                latitude,
                depth,
                magnitude,
                title,
            })
        })
        .collect()
}

/// Check that a plate boundary document looks like GeoJSON and hand it back
/// untouched.
pub(crate) fn parse_plates(origin: &str, document: Value) -> Result<Value, FeedError> {
    match document.get("type") {
        Some(Value::String(_)) if document.is_object() => Ok(document),
        Some(_) => Err(FeedError::parse(origin, "'type' member is not a string")),
        None => Err(FeedError::parse(origin, "not a GeoJSON object")),
    }
}
