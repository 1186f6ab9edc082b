//! Volume indicators: volume ratio

pub mod ratio;

pub use ratio::*;
