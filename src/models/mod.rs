//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod signal;

pub use indicators::{IndicatorFrame, IndicatorRow, IndicatorSnapshot};
pub use market::{Bar, PriceSeries};
pub use signal::{Signal, SignalCategory, SignalSet};
