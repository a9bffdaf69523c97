//! Classification of property keys against the override namespace.

use crate::ConfigError;

/// Outer prefix marking a property as belonging to the service config.
pub const WRAPPER_PREFIX: &str = "dw";
/// Engine sub-namespace inside the wrapper.
const ENGINE_NAMESPACE: &str = "graphhopper";

/// Engine settings that may be overridden through properties.
pub const ALLOWED_OVERRIDES: &[&str] = &["datareader.file", "graph.location"];

/// How a single property key relates to the override namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideRule {
    /// Bare `graphhopper.*` key missing the wrapper prefix. Fatal.
    Misdirected,
    /// Wrapped key for an allow-listed setting.
    Allowed { engine_key: &'static str },
    /// Wrapped key for a setting that cannot be overridden.
    Unsupported,
    /// Not part of the service config namespace.
    Unrelated,
}

/// Classify one property key. Pure; no logging or mutation.
///
/// Matching is by namespace segment, not raw string prefix: `dw.graphhopperx`
/// is unrelated, and an allow-listed key only matches in full, so
/// `dw.graphhopper.datareader.file.extra` is unsupported rather than applied.
pub fn classify_property(key: &str) -> OverrideRule {
    if key
        .strip_prefix(ENGINE_NAMESPACE)
        .is_some_and(|rest| rest.starts_with('.'))
    {
        return OverrideRule::Misdirected;
    }

    let Some(rest) = key
        .strip_prefix(WRAPPER_PREFIX)
        .and_then(|rest| rest.strip_prefix('.'))
        .and_then(|rest| rest.strip_prefix(ENGINE_NAMESPACE))
    else {
        return OverrideRule::Unrelated;
    };

    if rest.is_empty() {
        return OverrideRule::Unsupported;
    }
    let Some(setting) = rest.strip_prefix('.') else {
        // e.g. `dw.graphhopperx`
        return OverrideRule::Unrelated;
    };

    match ALLOWED_OVERRIDES
        .iter()
        .copied()
        .find(|allowed| *allowed == setting)
    {
        Some(engine_key) => OverrideRule::Allowed { engine_key },
        None => OverrideRule::Unsupported,
    }
}

/// Build the fatal error for a bare-prefixed key.
pub(super) fn misdirected(key: &str) -> ConfigError {
    ConfigError::MisdirectedOverride {
        key: key.to_string(),
        expected: format!("{WRAPPER_PREFIX}.{ENGINE_NAMESPACE}."),
        found: format!("{ENGINE_NAMESPACE}."),
    }
}
