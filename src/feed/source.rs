//! Feed locations

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use reqwest::Url;

const USGS_SUMMARY_BASE: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";
const PB2002_BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Minimum magnitude class of a USGS summary feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FeedLevel {
    Significant,
    #[value(name = "4.5")]
    M4_5,
    #[value(name = "2.5")]
    M2_5,
    #[value(name = "1.0")]
    M1_0,
    All,
}

/// Time window of a USGS summary feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FeedPeriod {
    Hour,
    Day,
    Week,
    Month,
}

impl FeedLevel {
    fn slug(self) -> &'static str {
        match self {
            FeedLevel::Significant => "significant",
            FeedLevel::M4_5 => "4.5",
            FeedLevel::M2_5 => "2.5",
            FeedLevel::M1_0 => "1.0",
            FeedLevel::All => "all",
        }
    }
}

impl FeedPeriod {
    fn slug(self) -> &'static str {
        match self {
            FeedPeriod::Hour => "hour",
            FeedPeriod::Day => "day",
            FeedPeriod::Week => "week",
            FeedPeriod::Month => "month",
        }
    }
}

/// URL of a USGS summary feed, e.g. `.../summary/all_week.geojson`
pub(crate) fn usgs_feed_url(level: FeedLevel, period: FeedPeriod) -> String {
    format!(
        "{}/{}_{}.geojson",
        USGS_SUMMARY_BASE,
        level.slug(),
        period.slug()
    )
}

pub(crate) fn default_plates_url() -> &'static str {
    PB2002_BOUNDARIES_URL
}

/// Where a feed document comes from
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Source {
    Url(Url),
    File(PathBuf),
}

impl Source {
    /// `http://` and `https://` are URLs; anything else is a local path
    /// (with an optional `file://` prefix)
    pub(crate) fn parse(input: &str) -> Result<Self, String> {
        if input.starts_with("http://") || input.starts_with("https://") {
            Url::parse(input)
                .map(Source::Url)
                .map_err(|e| format!("Invalid URL '{}': {}", input, e))
        } else {
            let path = input.strip_prefix("file://").unwrap_or(input);
            if path.is_empty() {
                return Err("Empty feed source".to_string());
            }
            Ok(Source::File(PathBuf::from(path)))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}
