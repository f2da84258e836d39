//! Leaflet page generation

use serde::Serialize;
use serde_json::Value;

use super::{Control, MapState};
use crate::marker::MarkerDescriptor;

const LEAFLET_VERSION: &str = "1.9.4";
const PAGE_TITLE: &str = "Earthquakes and Tectonic Plates";

const PAGE_STYLE: &str = r#"    html, body, #map { height: 100%; margin: 0; }
    .info.legend {
      background: rgba(255, 255, 255, 0.85);
      padding: 6px 10px;
      border-radius: 5px;
      box-shadow: 0 0 14px rgba(0, 0, 0, 0.25);
      font: 13px/18px Arial, Helvetica, sans-serif;
      color: #333;
    }
    .info.legend i {
      width: 18px;
      height: 18px;
      float: left;
      margin-right: 8px;
      opacity: 0.8;
    }"#;

const PAGE_SCRIPT: &str = r#"    const map = L.map('map', { center: page.center, zoom: page.zoom });

    const baseMaps = {};
    page.baseLayers.forEach(function (layer) {
      baseMaps[layer.name] = L.tileLayer(layer.url, layer.options);
    });
    baseMaps[page.activeBase].addTo(map);

    const earthquakes = L.layerGroup();
    page.markers.forEach(function (marker) {
      L.circleMarker(marker.position, marker).bindPopup(marker.popup).addTo(earthquakes);
    });
    earthquakes.addTo(map);

    const overlays = {};
    page.overlays.forEach(function (overlay) {
      const layer = L.geoJSON(overlay.geometry, {
        style: { color: overlay.color, weight: overlay.weight }
      });
      overlays[overlay.name] = layer;
      if (overlay.enabled) {
        layer.addTo(map);
      }
    });

    L.control.layers(baseMaps, overlays).addTo(map);

    page.controls.forEach(function (panel) {
      const control = L.control({ position: panel.position });
      control.onAdd = function () {
        const div = L.DomUtil.create('div', 'info legend');
        div.innerHTML = panel.html;
        return div;
      };
      control.addTo(map);
    });"#;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageData<'a> {
    center: [f64; 2],
    zoom: u8,
    base_layers: Vec<PageBaseLayer<'a>>,
    active_base: &'a str,
    markers: Vec<MarkerDescriptor>,
    overlays: Vec<PageOverlay<'a>>,
    controls: Vec<PagePanel>,
}

#[derive(Serialize)]
struct PageBaseLayer<'a> {
    name: &'a str,
    url: &'a str,
    options: &'a Value,
}

#[derive(Serialize)]
struct PageOverlay<'a> {
    name: &'a str,
    geometry: &'a Value,
    color: &'a str,
    weight: f64,
    enabled: bool,
}

#[derive(Serialize)]
struct PagePanel {
    position: &'static str,
    html: String,
}

fn page_data(state: &MapState) -> PageData<'_> {
    PageData {
        center: [state.viewport.center.0, state.viewport.center.1],
        zoom: state.viewport.zoom,
        base_layers: state
            .base_layers
            .iter()
            .map(|l| PageBaseLayer {
                name: l.name,
                url: l.url_template,
                options: &l.options,
            })
            .collect(),
        active_base: state.active_base_layer().name,
        // Leaflet cannot draw a negative radius
        markers: state
            .markers
            .iter()
            .map(|m| MarkerDescriptor {
                radius: m.radius.max(0.0),
                ..m.clone()
            })
            .collect(),
        overlays: state
            .overlays
            .iter()
            .map(|o| PageOverlay {
                name: &o.name,
                geometry: &o.geometry,
                color: o.color,
                weight: o.weight,
                enabled: o.enabled,
            })
            .collect(),
        controls: state.controls.iter().map(panel).collect(),
    }
}

fn panel(control: &Control) -> PagePanel {
    match control {
        Control::Legend(legend) => PagePanel {
            position: super::Corner::BottomRight.as_leaflet(),
            html: legend.to_html(),
        },
        Control::Label { corner, text } => PagePanel {
            position: corner.as_leaflet(),
            html: format!("<strong>{}</strong>", crate::marker::escape_html(text)),
        },
    }
}

/// JSON for embedding in a `<script>` element. `<` only occurs inside JSON
/// strings, where `<` is equivalent, so no `</script>` can appear.
fn script_json(data: &PageData<'_>) -> Result<String, String> {
    serde_json::to_string(data)
        .map(|json| json.replace('<', "\\u003c"))
        .map_err(|e| format!("Failed to serialize map data: {}", e))
}

pub(super) fn render(state: &MapState) -> Result<String, String> {
    let data = script_json(&page_data(state))?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@{version}/dist/leaflet.css">
  <script src="https://unpkg.com/leaflet@{version}/dist/leaflet.js"></script>
  <style>
{style}
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
    const page = {data};
{script}
  </script>
</body>
</html>
"#,
        title = PAGE_TITLE,
        version = LEAFLET_VERSION,
        style = PAGE_STYLE,
        data = data,
        script = PAGE_SCRIPT,
    ))
}
