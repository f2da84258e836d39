//! Depth distribution stats mode

use crate::chart;
use crate::depth::{BucketCounts, ColorBucket};
use crate::feed::{Fetcher, Source};
use crate::output::{
    get_display_name, print_bucket_header, print_bucket_row, print_error, print_legend,
    print_separator, print_source_info, print_totals,
};

use super::load_earthquakes;

const TABLE_WIDTH: usize = 32;

/// Run depth distribution analysis of the earthquake feed
pub async fn run_stats(fetcher: &Fetcher, source: &Source, quiet: bool, image_path: Option<&str>) {
    let records = load_earthquakes(fetcher, source).await.unwrap_or_else(|e| {
        tracing::error!(layer = "earthquakes", error = %e, "feed unavailable");
        print_error(&e.to_string());
        std::process::exit(1);
    });

    let counts = BucketCounts::from_records(&records);
    let source_name = source.to_string();

    if !quiet {
        println!("Depth Distribution");
        print_source_info("Feed", &source_name);
        println!();
    }

    println!("[Events per Depth Bucket]");
    print_bucket_header();
    print_separator(TABLE_WIDTH);
    for bucket in ColorBucket::ALL {
        print_bucket_row(bucket, &counts);
    }
    print_separator(TABLE_WIDTH);
    print_totals(&counts);

    if !quiet {
        println!();
        print_legend();
    }

    // Output chart if requested
    if let Some(path) = image_path {
        let chart_data = chart::DistributionChartData {
            source: get_display_name(&source_name).to_string(),
            buckets: ColorBucket::ALL
                .iter()
                .map(|&b| (b.label().to_string(), b.color(), counts.get(b)))
                .collect(),
        };

        if let Err(e) = chart::render_distribution_chart(&chart_data, path) {
            print_error(&e);
        } else {
            eprintln!("Chart saved to: {}", path);
        }
    }
}
