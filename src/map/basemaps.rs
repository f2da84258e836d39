//! Basemap tile layer definitions

use serde_json::{Value, json};

const OSM_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const MAPBOX_URL: &str =
    "https://api.mapbox.com/styles/v1/{id}/tiles/{z}/{x}/{y}?access_token={accessToken}";
const MAPBOX_ATTRIBUTION: &str = "Map data &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, Imagery © <a href=\"https://www.mapbox.com/\">Mapbox</a>";
const MAPBOX_STYLE: &str = "mapbox/satellite-v9";
/// Embedded when no token is configured; Mapbox rejects it, so the layer
/// renders without imagery
pub(crate) const MAPBOX_TOKEN_PLACEHOLDER: &str = "YOUR_MAPBOX_ACCESS_TOKEN";

const TOPO_URL: &str = "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png";
const TOPO_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.opentopomap.org\">OpenTopoMap</a> contributors";

/// A selectable basemap: Leaflet tile URL template plus tile layer options
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BaseLayer {
    pub(crate) name: &'static str,
    pub(crate) url_template: &'static str,
    pub(crate) options: Value,
}

/// OpenStreetMap, Satellite, Topographical and Street, in layer control order
pub(crate) fn standard_layers(mapbox_token: Option<&str>) -> Vec<BaseLayer> {
    vec![
        BaseLayer {
            name: "OpenStreetMap",
            url_template: OSM_URL,
            options: json!({ "attribution": OSM_ATTRIBUTION }),
        },
        BaseLayer {
            name: "Satellite",
            url_template: MAPBOX_URL,
            options: json!({
                "attribution": MAPBOX_ATTRIBUTION,
                "maxZoom": 18,
                "id": MAPBOX_STYLE,
                "tileSize": 512,
                "zoomOffset": -1,
                "accessToken": mapbox_token.unwrap_or(MAPBOX_TOKEN_PLACEHOLDER),
            }),
        },
        BaseLayer {
            name: "Topographical",
            url_template: TOPO_URL,
            options: json!({ "attribution": TOPO_ATTRIBUTION }),
        },
        BaseLayer {
            name: "Street",
            url_template: OSM_URL,
            options: json!({ "attribution": OSM_ATTRIBUTION }),
        },
    ]
}
