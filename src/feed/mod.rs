//! Remote GeoJSON feeds: sources, fetching and parsing

mod error;
mod fetch;
mod parse;
mod source;

pub(crate) use error::FeedError;
pub(crate) use fetch::Fetcher;
pub(crate) use parse::{parse_earthquakes, parse_plates};
pub(crate) use source::{FeedLevel, FeedPeriod, Source, default_plates_url, usgs_feed_url};

/// One earthquake from the USGS summary feed
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EarthquakeRecord {
    pub(crate) longitude: f64,
    pub(crate) latitude: f64,
    /// km below sea level; negative above it
    pub(crate) depth: f64,
    pub(crate) magnitude: f64,
    pub(crate) title: String,
}
