//! Configuration model and startup reconciliation for the railway routing service.
//!
//! This crate owns the service config document, its loader and shape checks,
//! and the property override pass that runs once before the routing engine is
//! initialized.

mod error;
mod loader;
mod model;
mod overrides;

/// Public error type returned by config loading and override APIs.
pub use error::ConfigError;
/// Loader entry points and document format detection.
pub use loader::{ConfigFormat, default_config_paths};
/// Configuration schema models.
pub use model::*;
/// Property override classification and application.
pub use overrides::{
    ALLOWED_OVERRIDES, OverrideRule, OverrideReport, WRAPPER_PREFIX, apply_overrides,
    classify_property,
};
