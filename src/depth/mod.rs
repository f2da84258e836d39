//! Earthquake depth classification

mod buckets;
mod counts;

pub(crate) use buckets::{ColorBucket, classify};
pub(crate) use counts::BucketCounts;
