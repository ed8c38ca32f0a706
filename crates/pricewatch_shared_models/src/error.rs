use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("minute of day {0} is outside 0..=1439")]
pub struct InvalidMinuteOfDay(pub u32);

/// Failures of a price source. None of them are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("price request failed: {0}")]
    Request(String),
    #[error("could not decode price response: {0}")]
    Decode(String),
    #[error("response carried no {currency} price for {asset}")]
    MissingPrice { asset: String, currency: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store operation failed: {0}")]
    Backend(String),
    #[error("stored observation is corrupt: {0}")]
    Corrupt(String),
}
