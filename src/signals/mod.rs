//! Signal evaluation interfaces.

pub mod analyzer;
pub mod categories;
pub mod engine;
pub mod scoring;
pub mod thresholds;

pub use analyzer::SignalAnalyzer;
pub use categories::{Categorizer, Sector, UNIVERSE};
pub use engine::{SignalEngine, TickerEvaluation};
pub use scoring::*;
pub use thresholds::{SignalThresholds, SignalWeights};
