//! Environment-driven configuration.

use crate::core::runtime::RuntimeConfig;
use crate::core::scheduler::CycleSchedule;
use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_RESULTS_DIR: &str = "quantum_stock_data";
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_EVAL_INTERVAL_SECONDS: u64 = 3600;

/// Deployment environment name from `APP_ENV`, `sandbox` when unset.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub runtime: RuntimeConfig,
    pub schedule: CycleSchedule,
    pub results_dir: PathBuf,
    pub yahoo_base_url: String,
}

impl MonitorConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = RuntimeConfig::default();

        let tickers = match env::var("TICKERS") {
            Ok(raw) => {
                let tickers = parse_ticker_list(&raw);
                if tickers.is_empty() {
                    return Err(ConfigError::Invalid {
                        key: "TICKERS".to_string(),
                        value: raw,
                    });
                }
                tickers
            }
            Err(_) => defaults.tickers,
        };

        let runtime = RuntimeConfig {
            tickers,
            lookback_days: parse_var("LOOKBACK_DAYS", defaults.lookback_days)?,
            request_delay: Duration::from_millis(parse_var(
                "REQUEST_DELAY_MS",
                defaults.request_delay.as_millis() as u64,
            )?),
            fetch_retries: parse_var("FETCH_RETRIES", defaults.fetch_retries)?,
            retry_delay: Duration::from_millis(parse_var(
                "FETCH_RETRY_DELAY_MS",
                defaults.retry_delay.as_millis() as u64,
            )?),
        };

        let interval: u64 = parse_var("EVAL_INTERVAL_SECONDS", DEFAULT_EVAL_INTERVAL_SECONDS)?;
        let cron = env::var("EVAL_CRON").ok().filter(|c| !c.trim().is_empty());
        let schedule = CycleSchedule::from_settings(interval, cron.as_deref())?;

        Ok(Self {
            runtime,
            schedule,
            results_dir: env::var("RESULTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_RESULTS_DIR)),
            yahoo_base_url: env::var("YAHOO_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_YAHOO_BASE_URL.to_string()),
        })
    }
}

/// Split a comma-separated ticker list, trimming and upper-casing entries.
pub fn parse_ticker_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
