use crate::keys::{StoreKeys, min_score};
use pricewatch_shared_models::{
    NewObservation, ObservationFilter, PriceObservation, PriceStore, StoreError,
};
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, RedisError};
use serde_json::{from_str, to_string};
use tracing::debug;

fn backend(e: RedisError) -> StoreError {
    StoreError::Backend(e.to_string())
}

/// Observation history kept in Redis.
///
/// Holds one connection for its whole lifetime; dropping it closes the connection.
pub struct RedisStore {
    con: MultiplexedConnection,
    keys: StoreKeys,
}

impl RedisStore {
    pub async fn connect(redis_url: &str, key_prefix: &str) -> Result<Self, StoreError> {
        let client =
            Client::open(redis_url).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let con = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Self {
            con,
            keys: StoreKeys::new(key_prefix),
        })
    }

    pub fn keys(&self) -> &StoreKeys {
        &self.keys
    }
}

impl PriceStore for RedisStore {
    async fn insert(&mut self, observation: &NewObservation) -> Result<u64, StoreError> {
        let id: u64 = self.con.incr(&self.keys.next_id, 1).await.map_err(backend)?;
        let record = observation.clone().into_observation(id);
        let member = to_string(&record).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let _: () = self
            .con
            .zadd(&self.keys.observations, member, record.timestamp.timestamp_millis())
            .await
            .map_err(backend)?;
        Ok(id)
    }

    async fn query(
        &mut self,
        filter: &ObservationFilter,
    ) -> Result<Vec<PriceObservation>, StoreError> {
        let members: Vec<String> = self
            .con
            .zrangebyscore(&self.keys.observations, min_score(filter), "+inf")
            .await
            .map_err(backend)?;
        debug!(members = members.len(), key = %self.keys.observations, "read observations");

        let mut observations = Vec::with_capacity(members.len());
        for member in members {
            let observation: PriceObservation =
                from_str(&member).map_err(|e| StoreError::Corrupt(e.to_string()))?;
            if filter.matches(&observation) {
                observations.push(observation);
            }
        }
        Ok(observations)
    }
}
