//! Test helpers shared across railway routing crates.

pub mod engine;
pub mod fixtures;

pub use engine::{FailingEngine, RecordingEngine};
pub use fixtures::{SERVICE_YAML, properties, service_config, write_config};
