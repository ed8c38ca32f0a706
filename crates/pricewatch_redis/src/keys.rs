use pricewatch_shared_models::ObservationFilter;

pub const DEFAULT_KEY_PREFIX: &str = "pricewatch";

/// Redis keys used by one history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    /// Sorted set of JSON records scored by epoch milliseconds.
    pub observations: String,
    /// Counter handing out observation ids.
    pub next_id: String,
}

impl StoreKeys {
    pub fn new(prefix: &str) -> Self {
        let prefix = match prefix.trim() {
            "" => DEFAULT_KEY_PREFIX,
            prefix => prefix,
        };
        Self {
            observations: format!("{prefix}:observations"),
            next_id: format!("{prefix}:next_id"),
        }
    }
}

/// `ZRANGEBYSCORE` lower bound for a filter.
///
/// Millisecond scores floor the cutoff, so the range may include a few
/// records just before it; callers re-apply the filter.
pub fn min_score(filter: &ObservationFilter) -> String {
    match filter.since {
        Some(cutoff) => cutoff.timestamp_millis().to_string(),
        None => "-inf".to_string(),
    }
}
