mod cli;
mod config;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use cli::{Args, Command};
use config::Config;
use dotenv::dotenv;
use pricewatch_coingecko::CoinGeckoClient;
use pricewatch_engine::{Window, build_report, fetch_and_record, parse_days};
use pricewatch_redis::RedisStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run_record(config: &Config, store: &mut RedisStore) -> anyhow::Result<()> {
    let client = CoinGeckoClient::new(config.coingecko_api_key.as_deref())
        .context("Failed to build CoinGecko client")?;

    fetch_and_record(&client, store, &config.pair, Utc::now())
        .await
        .with_context(|| {
            format!(
                "Failed to record {} price in {}",
                config.pair.asset, config.pair.currency
            )
        })?;

    println!("Record: OK");
    Ok(())
}

async fn run_stats(
    config: &Config,
    store: &mut RedisStore,
    days: Option<&str>,
    limit: usize,
    all_time: bool,
) -> anyhow::Result<()> {
    let now = Utc::now();
    let mut windows = Vec::new();
    if all_time {
        windows.push(Window::AllTime);
    }
    windows.push(Window::LastDays(parse_days(days)));

    for window in windows {
        let report = build_report(
            store,
            window,
            limit,
            now,
            &config.pair.asset,
            &config.pair.currency,
        )
        .await
        .with_context(|| format!("Failed to build report for {window}"))?;
        print!("{report}");
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenv().ok();
    init_tracing();
    info!("-- START {}", Utc::now());

    let config = Config::from_env().context("Invalid configuration")?;
    let mut store = RedisStore::connect(&config.redis_url, &config.key_prefix)
        .await
        .with_context(|| format!("Failed to open store at {}", config.redis_url))?;

    match args.command {
        Command::Record => run_record(&config, &mut store).await?,
        Command::Stats {
            days,
            limit,
            all_time,
        } => run_stats(&config, &mut store, days.as_deref(), limit, all_time).await?,
    }

    drop(store);
    info!("-- END {}", Utc::now());
    Ok(())
}
