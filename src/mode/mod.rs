//! CLI mode implementations

mod map;
mod stats;

pub use map::{MapOptions, run_map};
pub use stats::run_stats;

use crate::feed::{EarthquakeRecord, FeedError, Fetcher, Source, parse_earthquakes};

/// Fetch and decode the earthquake feed
pub(crate) async fn load_earthquakes(
    fetcher: &Fetcher,
    source: &Source,
) -> Result<Vec<EarthquakeRecord>, FeedError> {
    let document = fetcher.fetch_json(source).await?;
    parse_earthquakes(&source.to_string(), document)
}
