use crate::aggregator::BucketStats;
use itertools::Itertools;
use pricewatch_shared_models::MinuteOfDay;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Cheapest average first.
    Ascending,
    /// Most expensive average first.
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedBucket {
    pub minute_of_day: MinuteOfDay,
    pub stats: BucketStats,
}

impl fmt::Display for RankedBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = Avg. {} (price {} - Max {})",
            self.minute_of_day,
            self.stats.average(),
            self.stats.min,
            self.stats.max
        )
    }
}

fn ascending(a: &RankedBucket, b: &RankedBucket) -> Ordering {
    a.stats
        .average()
        .total_cmp(&b.stats.average())
        .then(a.minute_of_day.cmp(&b.minute_of_day))
}

/// Sorts buckets by average price and keeps the first `limit` of them.
///
/// Equal averages are broken by minute of day, earlier first when ascending
/// and later first when descending, so one order is the exact reverse of the
/// other.
pub fn rank(
    buckets: &BTreeMap<MinuteOfDay, BucketStats>,
    order: Order,
    limit: Option<usize>,
) -> Vec<RankedBucket> {
    buckets
        .iter()
        .map(|(&minute_of_day, &stats)| RankedBucket {
            minute_of_day,
            stats,
        })
        .sorted_by(|a, b| match order {
            Order::Ascending => ascending(a, b),
            Order::Descending => ascending(b, a),
        })
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}
