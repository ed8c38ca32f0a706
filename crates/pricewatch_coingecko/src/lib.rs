pub mod coin;
pub mod method;

use coin::{Coin, CoinParams};
use pricewatch_shared_models::{FetchError, PriceSource};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use tracing::debug;

const API_KEY_HEADER: &str = "x-cg-demo-api-key";

pub struct CoinGeckoClient {
    reqwest: Client,
}

impl CoinGeckoClient {
    /// Builds a client, optionally sending a demo API key with every request.
    pub fn new(api_key: Option<&str>) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = api_key {
            let value = HeaderValue::from_str(api_key)
                .map_err(|e| FetchError::Request(format!("invalid API key: {e}")))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let reqwest = ClientBuilder::new()
            .default_headers(headers)
            .user_agent(concat!("pricewatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self { reqwest })
    }

    /// Sends one GET for `M`; the params become the query string.
    pub async fn call<M: method::Method>(&self, params: M::Params) -> reqwest::Result<M::Response> {
        let url = M::url(&params);
        let response = self.reqwest.get(&url).query(&params).send().await?;
        debug!(%url, status = %response.status(), "coingecko response");

        response.error_for_status()?.json::<M::Response>().await
    }
}

fn fetch_error(error: reqwest::Error) -> FetchError {
    if error.is_decode() {
        FetchError::Decode(error.to_string())
    } else {
        FetchError::Request(error.to_string())
    }
}

impl PriceSource for CoinGeckoClient {
    async fn current_price(&self, asset_id: &str, currency: &str) -> Result<f64, FetchError> {
        let response = self
            .call::<Coin>(CoinParams::builder().id(asset_id).build())
            .await
            .map_err(fetch_error)?;
        debug!(coin = %response.id, symbol = %response.symbol, "fetched market data");

        response
            .price_in(currency)
            .ok_or_else(|| FetchError::MissingPrice {
                asset: asset_id.to_string(),
                currency: currency.to_string(),
            })
    }
}
