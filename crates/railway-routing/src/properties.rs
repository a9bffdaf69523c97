//! Launch property snapshots.
//!
//! Properties arrive as `-D key=value` flags and are collected into a plain
//! map before the override pass runs.

use std::collections::HashMap;

/// Unordered key/value snapshot of launch properties.
pub type PropertySnapshot = HashMap<String, String>;

/// Parse one `key=value` property flag.
///
/// A flag without `=` sets the key to an empty value.
pub fn parse_property(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw.split_once('=').unwrap_or((raw, ""));
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("property `{raw}` has an empty key"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Collect parsed flags into a snapshot; a repeated key keeps its last value.
pub fn snapshot_from_pairs<I, K, V>(pairs: I) -> PropertySnapshot
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}
