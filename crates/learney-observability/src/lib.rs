//! # learney-observability
//!
//! Structured logging for the learning state engine: subscriber setup and
//! one event helper per notable state or persistence event.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
