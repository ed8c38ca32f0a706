use crate::method::{BASE_URL, Method};
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Query for `/coins/{id}`. Only market data is requested by default.
#[derive(Serialize, Debug, Builder)]
#[builder(on(String, into))]
pub struct CoinParams {
    #[serde(skip)]
    pub id: String,
    #[builder(default = false)]
    pub localization: bool,
    #[builder(default = false)]
    pub tickers: bool,
    #[builder(default = true)]
    pub market_data: bool,
    #[builder(default = false)]
    pub community_data: bool,
    #[builder(default = false)]
    pub developer_data: bool,
    #[builder(default = false)]
    pub sparkline: bool,
}

#[derive(Deserialize, Debug)]
pub struct CoinResponse {
    pub id: String,
    pub symbol: String,
    pub market_data: Option<MarketData>,
}

#[derive(Deserialize, Debug)]
pub struct MarketData {
    /// Lower-case currency code to price.
    #[serde(default)]
    pub current_price: HashMap<String, Option<f64>>,
}

impl CoinResponse {
    pub fn price_in(&self, currency: &str) -> Option<f64> {
        self.market_data
            .as_ref()?
            .current_price
            .get(&currency.to_lowercase())
            .copied()
            .flatten()
    }
}

pub struct Coin;

impl Method for Coin {
    type Response = CoinResponse;
    type Params = CoinParams;

    fn url(params: &Self::Params) -> String {
        format!("{BASE_URL}/coins/{}", params.id)
    }
}
