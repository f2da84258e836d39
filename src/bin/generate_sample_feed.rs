use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde_json::{Value, json};

fn write_json(path: &Path, value: &Value) -> std::io::Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}

fn quake(lon: f64, lat: f64, depth: f64, mag: Option<f64>, place: &str) -> Value {
    let title = match mag {
        Some(m) => format!("M {:.1} - {}", m, place),
        None => format!("M ? - {}", place),
    };
    json!({
        "type": "Feature",
        "properties": { "mag": mag, "place": place, "title": title },
        "geometry": { "type": "Point", "coordinates": [lon, lat, depth] }
    })
}

fn sample_quakes() -> Value {
    // One event per depth bucket, plus the edge cases
    let features = vec![
        quake(-155.28, 19.40, 2.1, Some(2.3), "Volcano, Hawaii"),         // -10 to 10
        quake(-117.60, 35.77, 12.0, Some(3.1), "Ridgecrest, CA"),         // 10 to 30
        quake(142.37, 38.30, 35.0, Some(5.4), "off the coast of Honshu"), // 30 to 50
        quake(-71.50, -33.00, 55.4, Some(4.8), "Valparaiso, Chile"),      // 50 to 70
        quake(121.80, 24.10, 78.0, Some(4.2), "Hualien, Taiwan"),         // 70 to 90
        quake(178.10, -17.90, 563.0, Some(6.6), "Fiji region"),           // 90+
        quake(-122.80, 38.80, -1.5, Some(0.9), "The Geysers, CA"),        // above sea level
        quake(-150.00, 61.00, 40.0, None, "Southern Alaska"),             // no magnitude
    ];
    json!({
        "type": "FeatureCollection",
        "metadata": { "title": "quakemap sample feed", "count": features.len() },
        "features": features
    })
}

fn sample_plates() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "Name": "NA-PA", "PlateA": "NA", "PlateB": "PA" },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[-124.5, 40.3], [-121.0, 36.0], [-115.5, 32.5]]
                }
            },
            {
                "type": "Feature",
                "properties": { "Name": "PA-AU", "PlateA": "PA", "PlateB": "AU" },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[174.0, -40.0], [178.0, -30.0], [-177.0, -20.0]]
                }
            }
        ]
    })
}

fn main() -> std::io::Result<()> {
    let dir_arg = std::env::args().nth(1).unwrap_or_else(|| "test_data".to_string());
    let dir = Path::new(&dir_arg);
    std::fs::create_dir_all(dir)?;

    write_json(&dir.join("quakes.geojson"), &sample_quakes())?;
    write_json(&dir.join("plates.geojson"), &sample_plates())?;

    println!(
        "Generated: {}, {}",
        dir.join("quakes.geojson").display(),
        dir.join("plates.geojson").display()
    );
    Ok(())
}
