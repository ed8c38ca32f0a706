use pricewatch_shared_models::{FetchError, StoreError};
use thiserror::Error;

/// Why a recording attempt stored nothing.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Fetch(FetchError),
    #[error("invalid price: {0}")]
    InvalidPrice(String),
    #[error("invalid symbol {0:?}: asset and currency must be non-empty")]
    InvalidSymbol(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<FetchError> for RecordError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::MissingPrice { .. } => RecordError::InvalidPrice(error.to_string()),
            other => RecordError::Fetch(other),
        }
    }
}
