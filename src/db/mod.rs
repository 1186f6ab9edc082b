//! Persistence of cycle results.

pub mod results;

pub use results::ResultStore;
