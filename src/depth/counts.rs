//! Per-bucket event tally

use super::{ColorBucket, classify};
use crate::feed::EarthquakeRecord;

/// Event counts per depth bucket, indexed like `ColorBucket::ALL`
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct BucketCounts {
    counts: [usize; 6],
    pub(crate) max_magnitude: Option<f64>,
    pub(crate) max_depth: Option<f64>,
}

impl BucketCounts {
    pub(crate) fn from_records(records: &[EarthquakeRecord]) -> Self {
        let mut tally = Self::default();
        for record in records {
            tally.counts[classify(record.depth).index()] += 1;
            tally.max_magnitude = Some(match tally.max_magnitude {
                Some(m) => m.max(record.magnitude),
                None => record.magnitude,
            });
            tally.max_depth = Some(match tally.max_depth {
                Some(d) => d.max(record.depth),
                None => record.depth,
            });
        }
        tally
    }

    pub(crate) fn get(&self, bucket: ColorBucket) -> usize {
        self.counts[bucket.index()]
    }

    pub(crate) fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Share of all events in `bucket`, 0-100 (0 when there are no events)
    pub(crate) fn percentage(&self, bucket: ColorBucket) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.get(bucket) as f64 / total as f64 * 100.0
        }
    }
}
