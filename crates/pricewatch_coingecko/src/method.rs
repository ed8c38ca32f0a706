use serde::Serialize;

pub const BASE_URL: &str = "https://api.coingecko.com/api/v3";

pub trait Method {
    type Response: serde::de::DeserializeOwned;
    type Params: Serialize;

    fn url(params: &Self::Params) -> String;
}
