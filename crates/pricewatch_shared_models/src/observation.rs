use crate::minute_of_day::MinuteOfDay;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored price sample. Never mutated after the store assigns its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    /// Derived from `timestamp` when the record was written, kept as its own field.
    pub minute_of_day: MinuteOfDay,
    pub asset: String,
    pub currency: String,
    pub price: f64,
}

/// A sample waiting for the store to assign it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewObservation {
    pub timestamp: DateTime<Utc>,
    pub minute_of_day: MinuteOfDay,
    pub asset: String,
    pub currency: String,
    pub price: f64,
}

impl NewObservation {
    pub fn new(
        asset: impl Into<String>,
        currency: impl Into<String>,
        price: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            minute_of_day: MinuteOfDay::from_time(timestamp),
            asset: asset.into(),
            currency: currency.into(),
            price,
        }
    }

    pub fn into_observation(self, id: u64) -> PriceObservation {
        PriceObservation {
            id,
            timestamp: self.timestamp,
            minute_of_day: self.minute_of_day,
            asset: self.asset,
            currency: self.currency,
            price: self.price,
        }
    }
}
