use crate::depth::{BucketCounts, ColorBucket};
use colored::*;

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

/// Short name for a feed source: file name of a path or last URL segment
pub(crate) fn get_display_name(source: &str) -> &str {
    source
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(source)
}

fn swatch(bucket: ColorBucket) -> ColoredString {
    let (r, g, b) = bucket.rgb();
    "■■".truecolor(r, g, b)
}

pub(crate) fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

pub(crate) fn print_bucket_header() {
    println!("     {:<10} {:>8} {:>7}", "DEPTH(km)", "EVENTS", "%");
}

pub(crate) fn print_bucket_row(bucket: ColorBucket, counts: &BucketCounts) {
    println!(
        "  {} {:<10} {:>8} {:>7.1}",
        swatch(bucket),
        bucket.label(),
        counts.get(bucket),
        counts.percentage(bucket)
    );
}

pub(crate) fn print_totals(counts: &BucketCounts) {
    println!("     {:<10} {:>8}", "Total".bold(), counts.total());
    if let Some(mag) = counts.max_magnitude {
        println!("  Largest magnitude: {:.1}", mag);
    }
    if let Some(depth) = counts.max_depth {
        println!("  Deepest event: {:.1} km", depth);
    }
}

pub(crate) fn print_source_info(label: &str, source: &str) {
    println!("{}: {}", label, source);
}

pub(crate) fn print_legend() {
    println!("Depth buckets follow the map legend: marker fill color by hypocenter depth.");
    println!("%: Share of all events in the feed");
}

#[cfg(test)]
mod tests {
    use super::get_display_name;

    #[test]
    fn test_display_name() {
        assert_eq!(
            get_display_name(
                "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson"
            ),
            "all_week.geojson"
        );
        assert_eq!(get_display_name("data/quakes.geojson"), "quakes.geojson");
        assert_eq!(get_display_name("quakes.geojson"), "quakes.geojson");
        assert_eq!(get_display_name("dir/"), "dir");
    }
}
