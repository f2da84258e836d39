//! Unit tests for map module

use serde_json::json;

use super::{Control, Corner, MapState, PLATES_OVERLAY_NAME, Viewport};
use crate::depth::ColorBucket;
use crate::feed::EarthquakeRecord;
use crate::marker::{MarkerDescriptor, to_marker};

fn new_map() -> MapState {
    MapState::initialize(
        Viewport {
            center: (42.0, -90.0),
            zoom: 3,
        },
        None,
    )
}

fn markers(n: usize) -> Vec<MarkerDescriptor> {
    (0..n)
        .map(|i| {
            to_marker(&EarthquakeRecord {
                longitude: i as f64,
                latitude: -(i as f64),
                depth: 10.0 * i as f64,
                magnitude: 1.0 + i as f64,
                title: format!("quake {}", i),
            })
        })
        .collect()
}

fn plates() -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": { "Name": "NA-PA" },
            "geometry": { "type": "LineString", "coordinates": [[-120.0, 35.0], [-121.0, 36.0]] }
        }]
    })
}

#[test]
fn test_initialize_registers_four_basemaps() {
    let map = new_map();
    let names: Vec<&str> = map.base_layers().iter().map(|l| l.name).collect();
    assert_eq!(
        names,
        ["OpenStreetMap", "Satellite", "Topographical", "Street"]
    );
    assert_eq!(map.active_base_layer().name, "OpenStreetMap");
    assert!(map.markers().is_empty());
    assert!(map.overlays().is_empty());
    assert!(map.controls().is_empty());
}

#[test]
fn test_satellite_uses_configured_token() {
    let map = MapState::initialize(
        Viewport {
            center: (0.0, 0.0),
            zoom: 2,
        },
        Some("pk.test-token"),
    );
    let satellite = &map.base_layers()[1];
    assert_eq!(satellite.options["accessToken"], "pk.test-token");
    assert_eq!(satellite.options["id"], "mapbox/satellite-v9");
}

#[test]
fn test_satellite_without_token_gets_placeholder() {
    let map = new_map();
    assert_eq!(
        map.base_layers()[1].options["accessToken"],
        super::basemaps::MAPBOX_TOKEN_PLACEHOLDER
    );
}

#[test]
fn test_select_base_layer() {
    let mut map = new_map();
    assert!(map.select_base_layer("Topographical"));
    assert_eq!(map.active_base_layer().name, "Topographical");
    assert!(!map.select_base_layer("Watercolor"));
    assert_eq!(map.active_base_layer().name, "Topographical");
}

#[test]
fn test_draw_markers_twice_doubles_count() {
    let mut map = new_map();
    let descriptors = markers(3);
    map.draw_markers(&descriptors);
    assert_eq!(map.markers().len(), 3);
    map.draw_markers(&descriptors);
    assert_eq!(map.markers().len(), 6);
    assert_eq!(map.markers()[0], map.markers()[3]);
}

#[test]
fn test_draw_plate_layer_registers_overlay_and_label() {
    let mut map = new_map();
    map.draw_plate_layer(plates());

    assert_eq!(map.overlays().len(), 1);
    let overlay = &map.overlays()[0];
    assert_eq!(overlay.name, PLATES_OVERLAY_NAME);
    assert_eq!(overlay.color, "green");
    assert_eq!(overlay.weight, 2.0);
    assert!(overlay.enabled);
    assert_eq!(overlay.geometry, plates());

    assert_eq!(
        map.controls(),
        [Control::Label {
            corner: Corner::BottomLeft,
            text: "Tectonic Plates".to_string()
        }]
    );
}

#[test]
fn test_draw_plate_layer_twice_replaces() {
    let mut map = new_map();
    map.draw_plate_layer(plates());
    map.draw_plate_layer(json!({ "type": "FeatureCollection", "features": [] }));
    assert_eq!(map.overlays().len(), 1);
    assert_eq!(map.overlays()[0].geometry["features"], json!([]));
    assert_eq!(map.controls().len(), 1);
}

#[test]
fn test_legend_lists_buckets_in_order() {
    let mut map = new_map();
    map.add_legend(&ColorBucket::ALL);
    map.add_legend(&ColorBucket::ALL);
    assert_eq!(map.controls().len(), 1);

    let Control::Legend(legend) = &map.controls()[0] else {
        panic!("expected legend control");
    };
    assert_eq!(legend.title, "Earthquake Depth");
    assert_eq!(
        legend.entries,
        [
            ("yellow", "-10 to 10"),
            ("lightcoral", "10 to 30"),
            ("darkorange", "30 to 50"),
            ("lightcoral", "50 to 70"),
            ("lightblue", "70 to 90"),
            ("darkblue", "90+"),
        ]
    );
}

#[test]
fn test_layer_order_does_not_change_page() {
    let descriptors = markers(4);

    let mut quakes_first = new_map();
    quakes_first.draw_markers(&descriptors);
    quakes_first.add_legend(&ColorBucket::ALL);
    quakes_first.draw_plate_layer(plates());

    let mut plates_first = new_map();
    plates_first.draw_plate_layer(plates());
    plates_first.draw_markers(&descriptors);
    plates_first.add_legend(&ColorBucket::ALL);

    assert_eq!(quakes_first.markers(), plates_first.markers());
    assert_eq!(quakes_first.overlays(), plates_first.overlays());
    let mut a = quakes_first.controls().to_vec();
    let mut b = plates_first.controls().to_vec();
    a.sort_by_key(|c| matches!(c, Control::Legend(_)));
    b.sort_by_key(|c| matches!(c, Control::Legend(_)));
    assert_eq!(a, b);
}

#[test]
fn test_render_html_contains_layers() {
    let mut map = new_map();
    map.draw_markers(&markers(2));
    map.add_legend(&ColorBucket::ALL);
    map.draw_plate_layer(plates());

    let html = map.render_html().unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("leaflet.js"));
    assert!(html.contains("\"center\":[42.0,-90.0]"));
    assert!(html.contains("\"zoom\":3"));
    assert!(html.contains("\"activeBase\":\"OpenStreetMap\""));
    assert!(html.contains("\"name\":\"Tectonic Plates\""));
    assert!(html.contains("NA-PA"));
    assert!(html.contains("Earthquake Depth"));
    assert!(html.contains("quake 1"));
    assert!(html.contains("L.control.layers(baseMaps, overlays)"));
}

#[test]
fn test_render_html_without_layers() {
    let html = new_map().render_html().unwrap();
    assert!(html.contains("\"markers\":[]"));
    assert!(html.contains("\"overlays\":[]"));
    assert!(!html.contains("Earthquake Depth"));
}

#[test]
fn test_render_html_cannot_close_script() {
    let mut map = new_map();
    map.draw_markers(&markers(1));
    map.draw_plate_layer(json!({
        "type": "FeatureCollection",
        "features": [],
        "name": "</script><script>alert(1)</script>"
    }));
    let html = map.render_html().unwrap();
    assert_eq!(html.matches("</script>").count(), 2);
    assert!(html.contains("\\u003c/script>\\u003cscript>alert(1)"));
}

#[test]
fn test_render_html_floors_negative_radius() {
    let mut map = new_map();
    let mut descriptor = markers(1).remove(0);
    descriptor.radius = -2.5;
    map.draw_markers(&[descriptor]);

    assert_eq!(map.markers()[0].radius, -2.5);
    let html = map.render_html().unwrap();
    assert!(html.contains("\"radius\":0.0"));
    assert!(!html.contains("-2.5"));
}

#[test]
fn test_write_html_matches_render() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("map.html");
    let mut map = new_map();
    map.draw_markers(&markers(3));

    map.write_html(path.to_str().unwrap()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, map.render_html().unwrap());
    assert!(written.contains("const page = {"));
}

#[test]
fn test_write_html_reports_unwritable_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing/map.html");
    let err = new_map().write_html(path.to_str().unwrap()).unwrap_err();
    assert!(err.starts_with("Failed to write map to"), "got: {}", err);
}
