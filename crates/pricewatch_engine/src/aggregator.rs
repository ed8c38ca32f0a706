use itertools::Itertools;
use pricewatch_shared_models::{MinuteOfDay, ObservationFilter, PriceObservation};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Statistics of every price sharing one minute of day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BucketStats {
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
}

impl BucketStats {
    fn empty() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn with(self, price: f64) -> Self {
        Self {
            count: self.count + 1,
            sum: self.sum + price,
            min: self.min.min(price),
            max: self.max.max(price),
        }
    }

    /// Arithmetic mean. Buckets are only built from at least one price.
    pub fn average(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Groups the observations accepted by `filter` by minute of day.
///
/// Minutes without observations get no bucket.
pub fn aggregate<'a, I>(
    observations: I,
    filter: &ObservationFilter,
) -> BTreeMap<MinuteOfDay, BucketStats>
where
    I: IntoIterator<Item = &'a PriceObservation>,
{
    let buckets: BTreeMap<_, _> = observations
        .into_iter()
        .filter(|observation| filter.matches(observation))
        .map(|observation| (observation.minute_of_day, observation.price))
        .into_grouping_map()
        .fold(BucketStats::empty(), |stats, _minute, price| stats.with(price))
        .into_iter()
        .collect();

    debug!(buckets = buckets.len(), "aggregated observations");
    buckets
}
