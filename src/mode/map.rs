//! Map mode: fetch both feeds and write the Leaflet page

use serde_json::Value;
use tokio::sync::mpsc;

use crate::depth::ColorBucket;
use crate::feed::{FeedError, Fetcher, Source, parse_plates};
use crate::map::{MapState, Viewport};
use crate::marker::{MarkerDescriptor, to_marker};
use crate::output::{print_error, print_warning};

use super::load_earthquakes;

pub struct MapOptions {
    pub quakes: Source,
    pub plates: Source,
    pub viewport: Viewport,
    pub basemap: String,
    pub mapbox_token: Option<String>,
    pub output_path: String,
    pub quiet: bool,
}

/// Result of one feed pipeline, ready to apply to the map
enum LayerUpdate {
    Earthquakes(Vec<MarkerDescriptor>),
    Plates(Value),
}

#[derive(Debug, Clone, Copy)]
enum Layer {
    Earthquakes,
    Plates,
}

impl Layer {
    fn name(self) -> &'static str {
        match self {
            Layer::Earthquakes => "earthquakes",
            Layer::Plates => "tectonic plates",
        }
    }
}

async fn earthquake_pipeline(fetcher: Fetcher, source: Source) -> Result<LayerUpdate, FeedError> {
    let records = load_earthquakes(&fetcher, &source).await?;
    Ok(LayerUpdate::Earthquakes(records.iter().map(to_marker).collect()))
}

async fn plate_pipeline(fetcher: Fetcher, source: Source) -> Result<LayerUpdate, FeedError> {
    let document = fetcher.fetch_json(&source).await?;
    parse_plates(&source.to_string(), document).map(LayerUpdate::Plates)
}

fn apply(map: &mut MapState, update: LayerUpdate) {
    match update {
        LayerUpdate::Earthquakes(markers) => {
            map.draw_markers(&markers);
            map.add_legend(&ColorBucket::ALL);
        }
        LayerUpdate::Plates(geometry) => map.draw_plate_layer(geometry),
    }
}

/// Run both feed pipelines concurrently and apply each layer as it
/// arrives. A failed pipeline is logged and its layer left out.
async fn build_map(
    fetcher: &Fetcher,
    mut map: MapState,
    quakes: Source,
    plates: Source,
) -> (MapState, Vec<Layer>) {
    let (tx, mut rx) = mpsc::channel::<(Layer, Result<LayerUpdate, FeedError>)>(2);

    let quake_tx = tx.clone();
    let quake_fetcher = fetcher.clone();
    tokio::spawn(async move {
        let outcome = earthquake_pipeline(quake_fetcher, quakes).await;
        let _ = quake_tx.send((Layer::Earthquakes, outcome)).await;
    });

    let plate_fetcher = fetcher.clone();
    tokio::spawn(async move {
        let outcome = plate_pipeline(plate_fetcher, plates).await;
        let _ = tx.send((Layer::Plates, outcome)).await;
    });

    let mut failed = Vec::new();
    while let Some((layer, outcome)) = rx.recv().await {
        match outcome {
            Ok(update) => {
                match &update {
                    LayerUpdate::Earthquakes(markers) => {
                        tracing::info!(layer = layer.name(), markers = markers.len(), "layer ready")
                    }
                    LayerUpdate::Plates(_) => tracing::info!(layer = layer.name(), "layer ready"),
                }
                apply(&mut map, update);
            }
            Err(e) => {
                tracing::error!(layer = layer.name(), fetch = e.is_fetch(), error = %e, "layer skipped");
                failed.push(layer);
            }
        }
    }

    (map, failed)
}

/// Run map mode
pub async fn run_map(fetcher: &Fetcher, options: MapOptions) {
    let mut map = MapState::initialize(options.viewport, options.mapbox_token.as_deref());
    if !map.select_base_layer(&options.basemap) {
        let names: Vec<&str> = map.base_layers().iter().map(|l| l.name).collect();
        print_error(&format!(
            "Unknown basemap '{}' (choose from: {})",
            options.basemap,
            names.join(", ")
        ));
        std::process::exit(1);
    }

    let (map, failed) = build_map(fetcher, map, options.quakes, options.plates).await;

    tracing::debug!(
        markers = map.markers().len(),
        overlays = map.overlays().len(),
        panels = map.controls().len(),
        "map assembled"
    );

    for layer in &failed {
        print_warning(&format!("{} layer unavailable, map written without it", layer.name()));
    }

    if let Err(e) = map.write_html(&options.output_path) {
        print_error(&e);
        std::process::exit(1);
    }

    if !options.quiet {
        eprintln!(
            "Map saved to: {} ({} earthquakes, {} overlays)",
            options.output_path,
            map.markers().len(),
            map.overlays().len()
        );
    }
}
