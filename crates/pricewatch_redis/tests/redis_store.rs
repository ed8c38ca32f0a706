use chrono::{Duration, TimeZone, Utc};
use pricewatch_redis::RedisStore;
use pricewatch_shared_models::{NewObservation, ObservationFilter, PriceStore, StoreError};
use tokio::test;

fn redis_url() -> String {
    std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1/".to_string())
}

#[test]
pub async fn invalid_url_is_unavailable() {
    let result = RedisStore::connect("not a redis url", "pricewatch-test").await;
    assert!(matches!(result, Err(StoreError::Unavailable(_))));
}

#[test]
#[ignore = "needs a running Redis server"]
pub async fn appends_and_queries_by_cutoff() {
    let prefix = format!("pricewatch-test-{}", Utc::now().timestamp_nanos_opt().unwrap_or_default());
    let mut store = RedisStore::connect(&redis_url(), &prefix)
        .await
        .expect("Failed to connect to Redis");

    let cutoff = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let old = NewObservation::new("BTC", "GBP", 1.0, cutoff - Duration::milliseconds(1));
    let new = NewObservation::new("BTC", "GBP", 2.0, cutoff);

    let first = store.insert(&old).await.expect("Failed to insert");
    let second = store.insert(&new).await.expect("Failed to insert");
    assert_eq!(second, first + 1);

    let all = store.query(&ObservationFilter::all()).await.expect("Failed to query");
    assert_eq!(all.len(), 2);

    let recent = store
        .query(&ObservationFilter::since(cutoff))
        .await
        .expect("Failed to query");
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].id, second);
    assert_eq!(recent[0].minute_of_day, new.minute_of_day);
}
