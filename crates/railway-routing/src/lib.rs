//! Startup surface for the railway routing service.
//!
//! Loads the service config document, applies launch property overrides,
//! and hands the result to a routing engine implementation.

/// Re-export for convenience.
pub use railway_routing_config as config;

pub mod properties;
pub mod startup;

pub use properties::{PropertySnapshot, parse_property, snapshot_from_pairs};
pub use startup::{PreparedConfig, RoutingEngine, prepare_config, resolve_config_path, start_engine};

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Binaries are still expected
/// to call this early in startup to ensure log output is wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::builder()
            .format_timestamp_millis()
            .parse_default_env()
            .try_init();
    }
}
