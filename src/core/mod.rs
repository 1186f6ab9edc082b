//! Core application primitives (monitor, scheduler)

pub mod runtime;
pub mod scheduler;

pub use runtime::*;
pub use scheduler::*;
