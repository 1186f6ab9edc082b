//! Technical-indicator stock monitor.
//!
//! Price series flow one way through the crate: a [`services::market_data::PriceSeriesProvider`]
//! yields daily bars, [`indicators::IndicatorEngine`] derives moving averages, bands and
//! oscillators, and [`signals::SignalAnalyzer`] reduces the latest snapshot to a scored
//! set of qualitative signals. [`core::Monitor`] drives the ticker universe through that
//! pipeline once per cycle.

pub mod common;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;
