//! Property overrides applied to engine settings at startup.
//!
//! A property snapshot (typically `-D key=value` launch flags) may override a
//! small allow-list of engine settings when the key carries the
//! `dw.graphhopper.` prefix. Keys that use the bare `graphhopper.` prefix are
//! rejected outright, since silently ignoring them would start the engine on
//! the wrong graph. Other wrapped keys are logged and skipped.

mod rules;


use crate::{ConfigDocument, ConfigError};
use log::{debug, warn};
use std::collections::HashMap;

pub use rules::{ALLOWED_OVERRIDES, OverrideRule, WRAPPER_PREFIX, classify_property};

/// Outcome of a successful override pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideReport {
    /// Engine setting keys written by the pass, in property-key order.
    pub applied: Vec<String>,
    /// Wrapped property keys that are not allowed as overrides.
    pub unsupported: Vec<String>,
}

impl OverrideReport {
    /// True when the pass neither applied nor warned about anything.
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.unsupported.is_empty()
    }
}

/// Apply allow-listed property overrides to the document's engine settings.
///
/// The whole snapshot is checked for misdirected keys before anything is
/// written, so an error leaves `document` unchanged. Keys are visited in
/// sorted order to keep logs and the report stable.
pub fn apply_overrides(
    document: &mut ConfigDocument,
    properties: &HashMap<String, String>,
) -> Result<OverrideReport, ConfigError> {
    let mut keys: Vec<&String> = properties.keys().collect();
    keys.sort();

    if let Some(key) = keys
        .iter()
        .find(|key| classify_property(key) == OverrideRule::Misdirected)
    {
        return Err(rules::misdirected(key));
    }

    let mut report = OverrideReport::default();
    for key in keys {
        match classify_property(key) {
            OverrideRule::Allowed { engine_key } => {
                let value = &properties[key];
                debug!("applying property override (key={key}, setting={engine_key})");
                document.set_engine_setting(engine_key, value.as_str());
                report.applied.push(engine_key.to_string());
            }
            OverrideRule::Unsupported => {
                warn!("the key {key} cannot be supplied as a property override; set it in the config file");
                report.unsupported.push(key.clone());
            }
            OverrideRule::Unrelated | OverrideRule::Misdirected => {}
        }
    }

    debug!(
        "property overrides done (applied={}, unsupported={})",
        report.applied.len(),
        report.unsupported.len()
    );
    Ok(report)
}
