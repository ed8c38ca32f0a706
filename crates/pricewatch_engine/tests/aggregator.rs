use chrono::{DateTime, Duration, TimeZone, Utc};
use pricewatch_engine::aggregate;
use pricewatch_shared_models::{MinuteOfDay, NewObservation, ObservationFilter, PriceObservation};

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, day, hour, minute, 0).unwrap()
}

fn observation(id: u64, time: DateTime<Utc>, price: f64) -> PriceObservation {
    NewObservation::new("BTC", "GBP", price, time).into_observation(id)
}

#[test]
fn empty_input_gives_no_buckets() {
    let buckets = aggregate(&Vec::<PriceObservation>::new(), &ObservationFilter::all());
    assert!(buckets.is_empty());
}

#[test]
fn one_minute_gives_one_bucket() {
    let prices = [100.0, 250.0, 40.0, 10.0];
    let observations: Vec<_> = prices
        .iter()
        .enumerate()
        .map(|(i, &price)| observation(i as u64, at(i as u32 + 1, 9, 0), price))
        .collect();

    let buckets = aggregate(&observations, &ObservationFilter::all());

    assert_eq!(buckets.len(), 1);
    let stats = buckets[&MinuteOfDay::new(540).unwrap()];
    assert_eq!(stats.count, 4);
    assert_eq!(stats.average(), 100.0);
    assert_eq!(stats.min, 10.0);
    assert_eq!(stats.max, 250.0);
}

#[test]
fn missing_minutes_are_absent() {
    let observations = vec![
        observation(1, at(1, 0, 0), 5.0),
        observation(2, at(1, 23, 59), 7.0),
        observation(3, at(2, 23, 59), 9.0),
    ];

    let buckets = aggregate(&observations, &ObservationFilter::all());

    let keys: Vec<u16> = buckets.keys().map(|m| m.value()).collect();
    assert_eq!(keys, vec![0, 1439]);
    assert_eq!(buckets[&MinuteOfDay::new(1439).unwrap()].average(), 8.0);
}

#[test]
fn stored_minute_of_day_is_the_key() {
    let mut odd = observation(1, at(1, 12, 0), 3.0);
    odd.minute_of_day = MinuteOfDay::new(7).unwrap();

    let buckets = aggregate(&[odd], &ObservationFilter::all());

    assert!(buckets.contains_key(&MinuteOfDay::new(7).unwrap()));
}

#[test]
fn average_does_not_depend_on_order() {
    let mut observations: Vec<_> = (0..50)
        .map(|i| observation(i, at(1, 3, 15) + Duration::days(i as i64), 0.1 * i as f64))
        .collect();
    let forward = aggregate(&observations, &ObservationFilter::all());
    observations.reverse();
    let backward = aggregate(&observations, &ObservationFilter::all());

    let minute = MinuteOfDay::new(195).unwrap();
    let (a, b) = (forward[&minute], backward[&minute]);
    assert_eq!(a.count, b.count);
    assert!((a.average() - b.average()).abs() < 1e-9);
    assert!((a.average() - 2.45).abs() < 1e-9);
}

#[test]
fn cutoff_filter_matches_manual_prefilter() {
    let cutoff = at(10, 0, 0);
    let observations: Vec<_> = (0..40)
        .map(|i| {
            let time = at(1, (i % 5) as u32, 30) + Duration::hours(i as i64 * 7);
            observation(i, time, 1_000.0 + i as f64)
        })
        .collect();

    let filtered = aggregate(&observations, &ObservationFilter::since(cutoff));

    let kept: Vec<_> = observations
        .iter()
        .filter(|o| o.timestamp >= cutoff)
        .cloned()
        .collect();
    assert!(kept.len() < observations.len());
    let manual = aggregate(&kept, &ObservationFilter::all());

    assert_eq!(filtered, manual);
    let total: usize = filtered.values().map(|s| s.count).sum();
    assert_eq!(total, kept.len());
}
