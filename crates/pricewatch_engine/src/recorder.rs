use crate::error::RecordError;
use chrono::{DateTime, Utc};
use pricewatch_shared_models::{NewObservation, PriceObservation, PriceSource, PriceStore};
use tracing::{info, warn};

/// The pair being tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPair {
    /// Symbol written to the store, e.g. `BTC`.
    pub asset: String,
    /// Identifier understood by the price source, e.g. `bitcoin`.
    pub source_id: String,
    pub currency: String,
}

fn validate_symbol(symbol: &str) -> Result<(), RecordError> {
    if symbol.trim().is_empty() {
        return Err(RecordError::InvalidSymbol(symbol.to_string()));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), RecordError> {
    if !price.is_finite() {
        return Err(RecordError::InvalidPrice(format!("{price} is not finite")));
    }
    if price < 0.0 {
        return Err(RecordError::InvalidPrice(format!("{price} is negative")));
    }
    Ok(())
}

/// Stores one observation taken at `now`.
///
/// Nothing is written when the symbols or the price are rejected.
pub async fn record<S: PriceStore>(
    store: &mut S,
    asset: &str,
    currency: &str,
    price: f64,
    now: DateTime<Utc>,
) -> Result<PriceObservation, RecordError> {
    validate_symbol(asset)?;
    validate_symbol(currency)?;
    if let Err(e) = validate_price(price) {
        warn!(asset, currency, price, "rejected price");
        return Err(e);
    }

    let observation = NewObservation::new(asset, currency, price, now);
    let id = store.insert(&observation).await?;
    let observation = observation.into_observation(id);

    info!(
        id,
        asset,
        currency,
        price,
        minute_of_day = %observation.minute_of_day,
        "recorded observation"
    );
    Ok(observation)
}

/// Fetches the current price once and records it.
///
/// A failed fetch is returned as is and leaves the store untouched.
pub async fn fetch_and_record<P: PriceSource, S: PriceStore>(
    source: &P,
    store: &mut S,
    pair: &AssetPair,
    now: DateTime<Utc>,
) -> Result<PriceObservation, RecordError> {
    let price = source.current_price(&pair.source_id, &pair.currency).await?;
    record(store, &pair.asset, &pair.currency, price, now).await
}
