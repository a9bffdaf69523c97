//! Configuration schema for the railway routing service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// Root config document handed to the routing engine at startup.
///
/// Serialized field names follow the service document layout
/// (`graphhopper`, `assets`, `flagEncoderProperties`). Any other top-level
/// hosting section (`server`, `logging`, `metrics`) is carried through
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigDocument {
    #[serde(default, rename = "graphhopper")]
    engine_settings: EngineSettings,
    #[serde(default = "default_asset_settings", rename = "assets")]
    asset_settings: Value,
    #[serde(
        default,
        rename = "flagEncoderProperties",
        alias = "flag_encoder_properties"
    )]
    flag_encoder_configs: Vec<FlagEncoderConfig>,
    #[serde(flatten)]
    service: Map<String, Value>,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            engine_settings: EngineSettings::default(),
            asset_settings: default_asset_settings(),
            flag_encoder_configs: Vec::new(),
            service: Map::new(),
        }
    }
}

fn default_asset_settings() -> Value {
    Value::Object(Map::new())
}

impl ConfigDocument {
    /// Start building a document programmatically with defaults applied.
    pub fn builder() -> ConfigDocumentBuilder {
        ConfigDocumentBuilder::new()
    }

    /// Settings consumed by the routing engine.
    pub fn engine_settings(&self) -> &EngineSettings {
        &self.engine_settings
    }

    /// Asset-serving settings, passed through without inspection.
    pub fn asset_settings(&self) -> &Value {
        &self.asset_settings
    }

    /// Flag-encoder blocks in document order.
    pub fn flag_encoder_configs(&self) -> &[FlagEncoderConfig] {
        &self.flag_encoder_configs
    }

    /// Hosting sections (`server`, `logging`, `metrics`) outside this crate's concern.
    pub fn service_sections(&self) -> &Map<String, Value> {
        &self.service
    }

    /// Insert or overwrite a single engine setting. No validation is applied.
    pub fn set_engine_setting(&mut self, key: impl Into<String>, value: impl Into<EngineValue>) {
        self.engine_settings.insert(key, value);
    }
}

/// Builder for assembling a `ConfigDocument` in code.
#[derive(Debug, Default, Clone)]
pub struct ConfigDocumentBuilder {
    document: ConfigDocument,
}

impl ConfigDocumentBuilder {
    /// Create a new builder seeded with an empty document.
    pub fn new() -> Self {
        Self {
            document: ConfigDocument::default(),
        }
    }

    /// Add or replace one engine setting.
    pub fn engine_setting(mut self, key: impl Into<String>, value: impl Into<EngineValue>) -> Self {
        self.document.set_engine_setting(key, value);
        self
    }

    /// Replace the asset-serving section.
    pub fn asset_settings(mut self, assets: Value) -> Self {
        self.document.asset_settings = assets;
        self
    }

    /// Append a flag-encoder block.
    pub fn flag_encoder(mut self, config: FlagEncoderConfig) -> Self {
        self.document.flag_encoder_configs.push(config);
        self
    }

    /// Set a pass-through hosting section.
    pub fn service_section(mut self, name: impl Into<String>, value: Value) -> Self {
        self.document.service.insert(name.into(), value);
        self
    }

    /// Finalize and return the built document.
    pub fn build(self) -> ConfigDocument {
        self.document
    }
}

/// Flat engine settings keyed by dot-delimited paths such as `datareader.file`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct EngineSettings(BTreeMap<String, EngineValue>);

impl EngineSettings {
    pub fn get(&self, key: &str) -> Option<&EngineValue> {
        self.0.get(key)
    }

    /// String value for `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(EngineValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert or overwrite, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<EngineValue>,
    ) -> Option<EngineValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, EngineValue> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for EngineSettings
where
    K: Into<String>,
    V: Into<EngineValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a EngineSettings {
    type Item = (&'a String, &'a EngineValue);
    type IntoIter = btree_map::Iter<'a, String, EngineValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Scalar value of a single engine setting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum EngineValue {
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Float(f64),
    String(String),
}

impl EngineValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EngineValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for EngineValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineValue::Bool(value) => write!(f, "{value}"),
            EngineValue::Integer(value) => write!(f, "{value}"),
            EngineValue::Unsigned(value) => write!(f, "{value}"),
            EngineValue::Float(value) => write!(f, "{value}"),
            EngineValue::String(value) => f.write_str(value),
        }
    }
}

impl From<String> for EngineValue {
    fn from(value: String) -> Self {
        EngineValue::String(value)
    }
}

impl From<&str> for EngineValue {
    fn from(value: &str) -> Self {
        EngineValue::String(value.to_string())
    }
}

impl From<bool> for EngineValue {
    fn from(value: bool) -> Self {
        EngineValue::Bool(value)
    }
}

impl From<i64> for EngineValue {
    fn from(value: i64) -> Self {
        EngineValue::Integer(value)
    }
}

impl From<u64> for EngineValue {
    fn from(value: u64) -> Self {
        EngineValue::Unsigned(value)
    }
}

impl From<f64> for EngineValue {
    fn from(value: f64) -> Self {
        EngineValue::Float(value)
    }
}

/// Named flag-encoder block describing a railway routing profile extension.
///
/// Only the name is interpreted here; every other key is kept verbatim for
/// the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlagEncoderConfig {
    pub name: String,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl FlagEncoderConfig {
    /// Create an encoder block with no extra properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Map::new(),
        }
    }

    /// Add one property to the block.
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}
