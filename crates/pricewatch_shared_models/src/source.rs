use crate::error::FetchError;
use std::future::Future;

/// Something that can quote the current price of an asset.
///
/// `asset_id` is whatever identifier the source understands (e.g. a CoinGecko
/// coin id such as `bitcoin`); `currency` is a currency code such as `GBP`.
pub trait PriceSource {
    fn current_price(
        &self,
        asset_id: &str,
        currency: &str,
    ) -> impl Future<Output = Result<f64, FetchError>>;
}
