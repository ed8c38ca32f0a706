use crate::error::StoreError;
use crate::filter::ObservationFilter;
use crate::observation::{NewObservation, PriceObservation};
use std::future::Future;

/// Append-only history of price observations.
pub trait PriceStore {
    /// Appends one observation and returns the id assigned to it.
    fn insert(
        &mut self,
        observation: &NewObservation,
    ) -> impl Future<Output = Result<u64, StoreError>>;

    /// Every stored observation accepted by `filter`, in no particular order.
    fn query(
        &mut self,
        filter: &ObservationFilter,
    ) -> impl Future<Output = Result<Vec<PriceObservation>, StoreError>>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    observations: Vec<PriceObservation>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store, assigning fresh ids in iteration order.
    pub fn with_observations(observations: impl IntoIterator<Item = NewObservation>) -> Self {
        let mut store = Self::new();
        for observation in observations {
            store.push(observation);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[PriceObservation] {
        &self.observations
    }

    fn push(&mut self, observation: NewObservation) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.observations.push(observation.into_observation(id));
        id
    }
}

impl PriceStore for MemoryStore {
    async fn insert(&mut self, observation: &NewObservation) -> Result<u64, StoreError> {
        Ok(self.push(observation.clone()))
    }

    async fn query(
        &mut self,
        filter: &ObservationFilter,
    ) -> Result<Vec<PriceObservation>, StoreError> {
        Ok(self
            .observations
            .iter()
            .filter(|observation| filter.matches(observation))
            .cloned()
            .collect())
    }
}
