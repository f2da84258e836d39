mod chart;
mod depth;
mod feed;
mod map;
mod marker;
mod mode;
mod output;

use std::io::IsTerminal;
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use feed::{FeedLevel, FeedPeriod, Fetcher, Source, default_plates_url, usgs_feed_url};
use map::Viewport;
use mode::{MapOptions, run_map, run_stats};
use output::{print_error, print_warning};

const DEFAULT_OUTPUT: &str = "quakemap.html";
const DEFAULT_CENTER: &str = "42,-90";
const DEFAULT_ZOOM: u8 = 3;
const DEFAULT_BASEMAP: &str = "OpenStreetMap";
const MAX_ZOOM: u8 = 18;

#[derive(Parser)]
#[command(
    name = "quakemap",
    version,
    about = "Earthquake and tectonic plate map generator for USGS GeoJSON feeds",
    after_help = "Examples:
  quakemap                                         Map of this week's earthquakes
  quakemap -o quakes.html --level 4.5 --period day M4.5+ events of the last day
  quakemap --quakes feed.geojson --plates pb.json  Use local GeoJSON files
  quakemap --center=-20,170 --zoom 4               Start over the South Pacific
  quakemap --stats                                 Depth distribution table
  quakemap --stats --image depth.png               Also save the table as a chart
  quakemap --no-color --stats                      Disable colored output"
)]
struct Args {
    /// Earthquake feed URL or GeoJSON file (overrides --level and --period)
    #[arg(long, value_name = "SOURCE")]
    quakes: Option<String>,

    /// Tectonic plate boundaries URL or GeoJSON file (map mode only)
    #[arg(long, value_name = "SOURCE")]
    plates: Option<String>,

    /// USGS feed magnitude class
    #[arg(long, value_enum, default_value_t = FeedLevel::All)]
    level: FeedLevel,

    /// USGS feed time window
    #[arg(long, value_enum, default_value_t = FeedPeriod::Week)]
    period: FeedPeriod,

    /// Output HTML map path [default: quakemap.html]
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Initial map center (map mode only)
    #[arg(long, default_value = DEFAULT_CENTER, value_name = "LAT,LON", allow_hyphen_values = true)]
    center: String,

    /// Initial zoom level, 0-18 (map mode only)
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    zoom: u8,

    /// Basemap shown when the page opens (map mode only)
    #[arg(long, default_value = DEFAULT_BASEMAP, value_name = "NAME")]
    basemap: String,

    /// Mapbox access token for the Satellite basemap (map mode only)
    #[arg(long, env = "MAPBOX_ACCESS_TOKEN", value_name = "TOKEN", hide_env_values = true)]
    mapbox_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECONDS")]
    timeout: f64,

    /// Print depth distribution of the earthquake feed instead of writing a map
    #[arg(long)]
    stats: bool,

    /// Output depth distribution chart as PNG image (stats mode only)
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Parse "LAT,LON" with latitude in [-90, 90] and longitude in [-180, 180]
fn parse_center(input: &str) -> Result<(f64, f64), String> {
    let invalid = || format!("Invalid center '{}' (expected LAT,LON)", input);
    let (lat, lon) = input.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("Latitude out of range: {}", lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(format!("Longitude out of range: {}", lon));
    }
    Ok((lat, lon))
}

fn check_parent_dir(path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(format!("Directory does not exist: {}", parent.display()));
    }
    Ok(())
}

/// First map-mode option set away from its default, if any
fn map_only_flag(args: &Args) -> Option<&'static str> {
    [
        (args.plates.is_some(), "--plates"),
        (args.basemap != DEFAULT_BASEMAP, "--basemap"),
        (args.center != DEFAULT_CENTER, "--center"),
        (args.zoom != DEFAULT_ZOOM, "--zoom"),
    ]
    .into_iter()
    .find_map(|(given, flag)| given.then_some(flag))
}

fn init_tracing(quiet: bool, no_color: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
    {
        print_warning(&format!("tracing init failed: {}", e));
    }
}

fn fail(msg: &str) -> ! {
    print_error(msg);
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    init_tracing(args.quiet, args.no_color);

    // Validate option combinations
    if args.image.is_some() && !args.stats {
        fail("--image can only be used with --stats");
    }

    if args.output.is_some() && args.stats {
        fail("--output cannot be used with --stats");
    }

    if args.stats
        && let Some(flag) = map_only_flag(&args)
    {
        fail(&format!("{} cannot be used with --stats", flag));
    }

    if args.zoom > MAX_ZOOM {
        fail(&format!("Zoom must be between 0 and {}", MAX_ZOOM));
    }

    if !(args.timeout > 0.0 && args.timeout.is_finite()) {
        fail("Timeout must be positive");
    }
    let timeout = Duration::try_from_secs_f64(args.timeout)
        .unwrap_or_else(|_| fail(&format!("Timeout too large: {}", args.timeout)));

    let center = parse_center(&args.center).unwrap_or_else(|e| fail(&e));

    // Validate output paths
    let output_path = args.output.unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    for path in [Some(&output_path), args.image.as_ref()].into_iter().flatten() {
        if let Err(e) = check_parent_dir(path) {
            fail(&e);
        }
    }

    let quakes_input = args
        .quakes
        .unwrap_or_else(|| usgs_feed_url(args.level, args.period));
    let quakes = Source::parse(&quakes_input).unwrap_or_else(|e| fail(&e));
    let plates = Source::parse(args.plates.as_deref().unwrap_or(default_plates_url()))
        .unwrap_or_else(|e| fail(&e));

    let fetcher = Fetcher::new(timeout)
        .unwrap_or_else(|e| fail(&format!("Cannot create HTTP client: {}", e)));

    // Dispatch to appropriate mode
    if args.stats {
        run_stats(&fetcher, &quakes, args.quiet, args.image.as_deref()).await;
    } else {
        run_map(
            &fetcher,
            MapOptions {
                quakes,
                plates,
                viewport: Viewport {
                    center,
                    zoom: args.zoom,
                },
                basemap: args.basemap,
                mapbox_token: args.mapbox_token.filter(|t| !t.trim().is_empty()),
                output_path,
                quiet: args.quiet,
            },
        )
        .await;
    }
}

#[cfg(test)]
mod tests {
    use super::parse_center;

    #[test]
    fn test_parse_center() {
        assert_eq!(parse_center("42,-90"), Ok((42.0, -90.0)));
        assert_eq!(parse_center(" -33.9 , 151.2 "), Ok((-33.9, 151.2)));
        assert!(parse_center("42").is_err());
        assert!(parse_center("north,east").is_err());
        assert!(parse_center("91,0").is_err());
        assert!(parse_center("0,181").is_err());
    }
}
