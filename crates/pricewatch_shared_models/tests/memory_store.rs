use chrono::{Duration, TimeZone, Utc};
use pricewatch_shared_models::{MemoryStore, NewObservation, ObservationFilter, PriceStore};
use tokio::test;

#[test]
pub async fn assigns_increasing_ids() {
    let mut store = MemoryStore::new();
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();

    let first = store
        .insert(&NewObservation::new("BTC", "GBP", 50_000.0, now))
        .await
        .unwrap();
    let second = store
        .insert(&NewObservation::new("BTC", "GBP", 50_010.0, now))
        .await
        .unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(store.len(), 2);
    assert_eq!(store.observations()[1].minute_of_day.value(), 750);
}

#[test]
pub async fn query_applies_inclusive_cutoff() {
    let cutoff = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap();
    let mut store = MemoryStore::with_observations([
        NewObservation::new("BTC", "GBP", 1.0, cutoff - Duration::seconds(1)),
        NewObservation::new("BTC", "GBP", 2.0, cutoff),
        NewObservation::new("BTC", "GBP", 3.0, cutoff + Duration::days(3)),
    ]);

    let all = store.query(&ObservationFilter::all()).await.unwrap();
    assert_eq!(all.len(), 3);

    let recent = store.query(&ObservationFilter::since(cutoff)).await.unwrap();
    let prices: Vec<f64> = recent.iter().map(|o| o.price).collect();
    assert_eq!(prices, vec![2.0, 3.0]);
}
