use crate::observation::PriceObservation;
use chrono::{DateTime, Utc};

/// Time-range restriction applied before bucketing. The lower bound is inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObservationFilter {
    pub since: Option<DateTime<Utc>>,
}

impl ObservationFilter {
    pub fn all() -> Self {
        Self { since: None }
    }

    pub fn since(cutoff: DateTime<Utc>) -> Self {
        Self {
            since: Some(cutoff),
        }
    }

    pub fn matches(&self, observation: &PriceObservation) -> bool {
        self.since
            .is_none_or(|cutoff| observation.timestamp >= cutoff)
    }
}
