//! Stockwatch Worker
//!
//! Evaluates the ticker universe immediately, then again on the configured
//! schedule, until interrupted.

use dotenvy::dotenv;
use std::sync::Arc;
use stockwatch::config::MonitorConfig;
use stockwatch::core::runtime::Monitor;
use stockwatch::core::scheduler::MonitorScheduler;
use stockwatch::db::ResultStore;
use stockwatch::logging;
use stockwatch::services::market_data::PriceSeriesProvider;
use stockwatch::services::yahoo::YahooFinanceProvider;
use stockwatch::signals::categories::{Categorizer, Sector};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = MonitorConfig::from_env()?;
    let env = stockwatch::config::get_environment();

    info!("Starting Stockwatch Worker");
    info!(environment = %env, "Environment");
    info!(
        tickers = config.runtime.tickers.len(),
        "Monitoring {} tickers: {}",
        config.runtime.tickers.len(),
        config.runtime.tickers.join(", ")
    );
    for sector in [
        Sector::QuantumPurePlay,
        Sector::BigTech,
        Sector::DefenseIndustrial,
        Sector::AiInfrastructure,
    ] {
        info!(sector = %sector, "{}: {}", sector, Categorizer::tickers_in(sector).join(", "));
    }
    info!(
        schedule = %config.schedule.describe(),
        lookback_days = config.runtime.lookback_days,
        results_dir = %config.results_dir.display(),
        "Schedule: {}",
        config.schedule.describe()
    );

    let provider: Arc<dyn PriceSeriesProvider + Send + Sync> =
        Arc::new(YahooFinanceProvider::new(config.yahoo_base_url.clone())?);
    let monitor = Arc::new(Monitor::new(config.runtime.clone(), provider));
    let store = Arc::new(ResultStore::new(config.results_dir.clone()));

    let scheduler = MonitorScheduler::new(monitor, store, config.schedule.clone());
    scheduler.start().await;

    info!("Worker started, press Ctrl+C to stop");
    signal::ctrl_c().await?;

    info!("Shutting down worker...");
    scheduler.stop().await;
    info!("Worker stopped");

    Ok(())
}
