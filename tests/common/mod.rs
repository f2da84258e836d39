//! Common test utilities

use std::path::Path;

/// (longitude, latitude, depth, magnitude, title)
pub type Quake<'a> = (f64, f64, f64, f64, &'a str);

/// One event per depth bucket, shallow to deep
pub const ONE_PER_BUCKET: [Quake<'static>; 6] = [
    (-155.3, 19.4, 2.0, 2.1, "M 2.1 - Hawaii"),
    (-117.6, 35.8, 12.0, 3.0, "M 3.0 - Ridgecrest"),
    (142.4, 38.3, 35.0, 5.4, "M 5.4 - Honshu"),
    (-71.5, -33.0, 55.0, 4.8, "M 4.8 - Valparaiso"),
    (121.8, 24.1, 78.0, 4.2, "M 4.2 - Hualien"),
    (178.1, -17.9, 563.0, 6.6, "M 6.6 - Fiji"),
];

/// Build a USGS-style earthquake FeatureCollection
pub fn quake_feed(quakes: &[Quake]) -> String {
    let features: Vec<String> = quakes
        .iter()
        .map(|(lon, lat, depth, mag, title)| {
            format!(
                r#"{{"type":"Feature","properties":{{"mag":{},"title":"{}"}},"geometry":{{"type":"Point","coordinates":[{},{},{}]}}}}"#,
                mag, title, lon, lat, depth
            )
        })
        .collect();
    format!(
        r#"{{"type":"FeatureCollection","features":[{}]}}"#,
        features.join(",")
    )
}

/// Plate boundary FeatureCollection with a single named boundary
pub fn plate_feed(name: &str) -> String {
    format!(
        r#"{{"type":"FeatureCollection","features":[{{"type":"Feature","properties":{{"Name":"{}"}},"geometry":{{"type":"LineString","coordinates":[[-124.5,40.3],[-115.5,32.5]]}}}}]}}"#,
        name
    )
}

/// Write text content to the given path
pub fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    std::fs::write(path, content)
}
