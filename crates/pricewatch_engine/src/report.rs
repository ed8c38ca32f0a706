use crate::aggregator::aggregate;
use crate::ranking::{Order, RankedBucket, rank};
use chrono::{DateTime, Duration, Utc};
use pricewatch_shared_models::{ObservationFilter, PriceStore, StoreError};
use std::fmt;
use tracing::debug;

pub const DEFAULT_WINDOW_DAYS: u32 = 10;

/// Reads the `days` argument of the stats command.
///
/// Anything other than a positive integer falls back to [`DEFAULT_WINDOW_DAYS`].
pub fn parse_days(arg: Option<&str>) -> u32 {
    arg.and_then(|days| days.trim().parse::<u32>().ok())
        .filter(|&days| days > 0)
        .unwrap_or(DEFAULT_WINDOW_DAYS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    AllTime,
    LastDays(u32),
}

impl Window {
    pub fn filter(&self, now: DateTime<Utc>) -> ObservationFilter {
        match self {
            Window::AllTime => ObservationFilter::all(),
            // a cutoff before chrono's earliest date covers the whole history
            Window::LastDays(days) => now
                .checked_sub_signed(Duration::days(i64::from(*days)))
                .map_or_else(ObservationFilter::all, ObservationFilter::since),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Window::AllTime => write!(f, "All time"),
            Window::LastDays(1) => write!(f, "Last 1 day"),
            Window::LastDays(days) => write!(f, "Last {days} days"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub window: Window,
    pub asset: String,
    pub currency: String,
    pub limit: usize,
    pub best: Vec<RankedBucket>,
    pub worst: Vec<RankedBucket>,
}

impl Report {
    fn write_table(
        &self,
        f: &mut fmt::Formatter<'_>,
        title: &str,
        rows: &[RankedBucket],
    ) -> fmt::Result {
        writeln!(
            f,
            "[{}] {} {} mins to buy {} in {} (UTC):",
            self.window, title, self.limit, self.asset, self.currency
        )?;
        if rows.is_empty() {
            writeln!(f, "(no observations)")?;
        }
        for row in rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_table(f, "Best", &self.best)?;
        self.write_table(f, "Worst", &self.worst)
    }
}

/// Ranks the minutes of day of the `asset`/`currency` observations inside `window`.
pub async fn build_report<S: PriceStore>(
    store: &mut S,
    window: Window,
    limit: usize,
    now: DateTime<Utc>,
    asset: &str,
    currency: &str,
) -> Result<Report, StoreError> {
    let filter = window.filter(now);
    let mut observations = store.query(&filter).await?;
    observations.retain(|observation| {
        observation.asset.eq_ignore_ascii_case(asset)
            && observation.currency.eq_ignore_ascii_case(currency)
    });
    debug!(%window, observations = observations.len(), "loaded observations");

    let buckets = aggregate(&observations, &filter);

    Ok(Report {
        window,
        asset: asset.to_string(),
        currency: currency.to_string(),
        limit,
        best: rank(&buckets, Order::Ascending, Some(limit)),
        worst: rank(&buckets, Order::Descending, Some(limit)),
    })
}
