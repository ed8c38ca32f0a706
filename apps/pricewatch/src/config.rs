use pricewatch_engine::AssetPair;
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{name} must not be empty")]
pub struct EmptyVariable {
    name: &'static str,
}

/// Runtime settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub redis_url: String,
    pub key_prefix: String,
    pub pair: AssetPair,
    pub coingecko_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, EmptyVariable> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EmptyVariable> {
        let var = |name: &'static str, default: &str| -> Result<String, EmptyVariable> {
            match lookup(name) {
                Some(value) if value.trim().is_empty() => Err(EmptyVariable { name }),
                Some(value) => Ok(value.trim().to_string()),
                None => Ok(default.to_string()),
            }
        };

        Ok(Config {
            redis_url: var("REDIS_URL", "redis://127.0.0.1/")?,
            key_prefix: var("PRICEWATCH_KEY_PREFIX", "pricewatch")?,
            pair: AssetPair {
                asset: var("PRICEWATCH_ASSET", "BTC")?,
                source_id: var("PRICEWATCH_COIN_ID", "bitcoin")?,
                currency: var("PRICEWATCH_CURRENCY", "GBP")?,
            },
            coingecko_api_key: lookup("COINGECKO_API_KEY").filter(|key| !key.trim().is_empty()),
        })
    }
}
