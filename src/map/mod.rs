//! Map state and HTML rendering

mod basemaps;
mod html;
mod legend;

pub(crate) use basemaps::BaseLayer;
pub(crate) use legend::Legend;

use serde_json::Value;

use crate::depth::ColorBucket;
use crate::marker::MarkerDescriptor;

pub(crate) const PLATES_OVERLAY_NAME: &str = "Tectonic Plates";
const PLATES_COLOR: &str = "green";
const PLATES_WEIGHT: f64 = 2.0;

/// Initial view of the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Viewport {
    pub(crate) center: (f64, f64),
    pub(crate) zoom: u8,
}

/// Corner of the map a control panel is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Corner {
    BottomLeft,
    BottomRight,
}

impl Corner {
    fn as_leaflet(self) -> &'static str {
        match self {
            Corner::BottomLeft => "bottomleft",
            Corner::BottomRight => "bottomright",
        }
    }
}

/// Static panel drawn on top of the map
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Control {
    Legend(Legend),
    Label { corner: Corner, text: String },
}

/// GeoJSON layer that can be toggled from the layer control
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Overlay {
    pub(crate) name: String,
    pub(crate) geometry: Value,
    pub(crate) color: &'static str,
    pub(crate) weight: f64,
    pub(crate) enabled: bool,
}

/// Everything the rendered page shows. Owned by the caller for the whole run;
/// layers can be added in any order.
#[derive(Debug, Clone)]
pub(crate) struct MapState {
    pub(crate) viewport: Viewport,
    base_layers: Vec<BaseLayer>,
    active_base: usize,
    markers: Vec<MarkerDescriptor>,
    overlays: Vec<Overlay>,
    controls: Vec<Control>,
}

impl MapState {
    /// Create a map with the four standard basemaps, OpenStreetMap active
    pub(crate) fn initialize(viewport: Viewport, mapbox_token: Option<&str>) -> Self {
        if mapbox_token.is_none() {
            tracing::warn!("no Mapbox access token; Satellite basemap tiles will not load");
        }
        Self {
            viewport,
            base_layers: basemaps::standard_layers(mapbox_token),
            active_base: 0,
            markers: Vec::new(),
            overlays: Vec::new(),
            controls: Vec::new(),
        }
    }

    pub(crate) fn base_layers(&self) -> &[BaseLayer] {
        &self.base_layers
    }

    pub(crate) fn active_base_layer(&self) -> &BaseLayer {
        &self.base_layers[self.active_base]
    }

    /// Switch the visible basemap. Returns false (and changes nothing) for an
    /// unknown name.
    pub(crate) fn select_base_layer(&mut self, name: &str) -> bool {
        match self.base_layers.iter().position(|l| l.name == name) {
            Some(i) => {
                self.active_base = i;
                true
            }
            None => false,
        }
    }

    /// Append markers to the earthquake layer. Not deduplicated: drawing the
    /// same descriptors twice yields twice the markers.
    pub(crate) fn draw_markers(&mut self, descriptors: &[MarkerDescriptor]) {
        self.markers.extend_from_slice(descriptors);
    }

    pub(crate) fn markers(&self) -> &[MarkerDescriptor] {
        &self.markers
    }

    /// Add the plate boundary overlay and its label. Replaces a previous
    /// plate overlay rather than stacking a second one.
    pub(crate) fn draw_plate_layer(&mut self, geometry: Value) {
        self.add_overlay(Overlay {
            name: PLATES_OVERLAY_NAME.to_string(),
            geometry,
            color: PLATES_COLOR,
            weight: PLATES_WEIGHT,
            enabled: true,
        });
        self.add_control(Control::Label {
            corner: Corner::BottomLeft,
            text: PLATES_OVERLAY_NAME.to_string(),
        });
    }

    pub(crate) fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    pub(crate) fn add_legend(&mut self, buckets: &[ColorBucket]) {
        self.add_control(Control::Legend(Legend::for_buckets(buckets)));
    }

    pub(crate) fn controls(&self) -> &[Control] {
        &self.controls
    }

    fn add_overlay(&mut self, overlay: Overlay) {
        match self.overlays.iter_mut().find(|o| o.name == overlay.name) {
            Some(existing) => *existing = overlay,
            None => self.overlays.push(overlay),
        }
    }

    // One legend per map, one label per text
    fn add_control(&mut self, control: Control) {
        let existing = self.controls.iter_mut().find(|c| match (&**c, &control) {
            (Control::Legend(_), Control::Legend(_)) => true,
            (Control::Label { text: a, .. }, Control::Label { text: b, .. }) => a == b,
            _ => false,
        });
        match existing {
            Some(slot) => *slot = control,
            None => self.controls.push(control),
        }
    }

    pub(crate) fn render_html(&self) -> Result<String, String> {
        html::render(self)
    }

    pub(crate) fn write_html(&self, path: &str) -> Result<(), String> {
        let page = self.render_html()?;
        std::fs::write(path, page)
            .map_err(|e| format!("Failed to write map to {}: {}", path, e))
    }
}

#[cfg(test)]
mod tests;
