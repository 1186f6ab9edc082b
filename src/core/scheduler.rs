//! Periodic re-evaluation of the ticker universe

use crate::core::runtime::{CycleReport, Monitor};
use crate::db::ResultStore;
use crate::error::ConfigError;
use crate::report;
use chrono::Utc;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

/// When cycles run after the first, which always runs immediately.
#[derive(Debug, Clone)]
pub enum CycleSchedule {
    /// Fixed period measured from start; missed periods are skipped.
    Every(Duration),
    /// Wall-clock cron schedule (6-field, seconds first).
    Cron { expr: String, schedule: Box<Schedule> },
}

impl CycleSchedule {
    /// A cron expression takes precedence over the fixed interval.
    pub fn from_settings(interval_seconds: u64, cron_expr: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(expr) = cron_expr {
            let schedule = Schedule::from_str(expr.trim())
                .map_err(|e| ConfigError::Cron(format!("'{}': {}", expr, e)))?;
            return Ok(CycleSchedule::Cron {
                expr: expr.trim().to_string(),
                schedule: Box::new(schedule),
            });
        }

        if interval_seconds == 0 {
            return Err(ConfigError::Invalid {
                key: "EVAL_INTERVAL_SECONDS".to_string(),
                value: interval_seconds.to_string(),
            });
        }
        Ok(CycleSchedule::Every(Duration::from_secs(interval_seconds)))
    }

    pub fn describe(&self) -> String {
        match self {
            CycleSchedule::Every(period) => format!("every {}s", period.as_secs()),
            CycleSchedule::Cron { expr, .. } => format!("cron '{}'", expr),
        }
    }
}

/// Runs the monitor on a [`CycleSchedule`] in a background task.
pub struct MonitorScheduler {
    monitor: Arc<Monitor>,
    store: Arc<ResultStore>,
    schedule: CycleSchedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl MonitorScheduler {
    pub fn new(monitor: Arc<Monitor>, store: Arc<ResultStore>, schedule: CycleSchedule) -> Self {
        info!(schedule = %schedule.describe(), "MonitorScheduler: created");
        Self {
            monitor,
            store,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        }
    }

    /// Start the scheduler. The first cycle runs right away.
    pub async fn start(&self) {
        let monitor = self.monitor.clone();
        let store = self.store.clone();
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("MonitorScheduler: started");
            match schedule {
                CycleSchedule::Every(period) => {
                    let mut ticker = tokio::time::interval(period);
                    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                    loop {
                        ticker.tick().await;
                        run_guarded(monitor.clone(), store.clone()).await;
                        info!("MonitorScheduler: next cycle in {}s", period.as_secs());
                    }
                }
                CycleSchedule::Cron { schedule, .. } => {
                    run_guarded(monitor.clone(), store.clone()).await;
                    loop {
                        let Some(next_tick) = schedule.upcoming(Utc).next() else {
                            warn!("MonitorScheduler: cron schedule has no upcoming runs, stopping");
                            break;
                        };
                        info!(next = %next_tick, "MonitorScheduler: next cycle at {}", next_tick);
                        let now = Utc::now();
                        if next_tick > now {
                            let wait = (next_tick - now).to_std().unwrap_or_default();
                            tokio::time::sleep(wait).await;
                        }
                        run_guarded(monitor.clone(), store.clone()).await;
                    }
                }
            }
        });

        let mut h = self.handle.write().await;
        *h = Some(handle);
    }

    /// Stop the scheduler
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("MonitorScheduler: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

/// Run one cycle, print its report and persist it.
///
/// Persistence failures are logged and do not abort the cycle.
pub async fn run_and_publish(monitor: &Monitor, store: &ResultStore) -> CycleReport {
    let cycle = monitor.run_cycle().await;
    print!("{}", report::render_cycle(&cycle));

    match store.save(&cycle).await {
        Ok(path) => info!(path = %path.display(), "Results saved to {}", path.display()),
        Err(e) => error!(error = %e, "Failed to save cycle results"),
    }
    cycle
}

/// Run a cycle in its own task so that a panic is contained to that cycle.
async fn run_guarded(monitor: Arc<Monitor>, store: Arc<ResultStore>) {
    let outcome = tokio::spawn(async move {
        run_and_publish(&monitor, &store).await;
    })
    .await;

    if let Err(e) = outcome {
        error!(error = %e, "MonitorScheduler: cycle aborted, continuing with schedule");
    }
}
