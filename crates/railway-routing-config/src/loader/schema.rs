//! Shape validation for service config documents.

use crate::ConfigError;
use serde_json::{Map, Value};

/// Top-level keys recognized in a service document.
const TOP_LEVEL_KEYS: &[&str] = &[
    "graphhopper",
    "assets",
    "flagEncoderProperties",
    "flag_encoder_properties",
    "server",
    "logging",
    "metrics",
];

/// Hosting sections that only need to be mappings.
const SERVICE_SECTIONS: &[&str] = &["server", "logging", "metrics"];

/// Validate a raw document against the expected section layout.
pub(super) fn validate_document_schema(value: &Value, label: &str) -> Result<(), ConfigError> {
    let root = Location::root(label);
    let map = root.object(value)?;
    for key in map.keys() {
        if !TOP_LEVEL_KEYS.contains(&key.as_str()) {
            return Err(root.key(key).error("unknown key"));
        }
    }

    if let Some(value) = map.get("graphhopper") {
        validate_engine_settings(value, root.key("graphhopper"))?;
    }

    match (
        map.get("flagEncoderProperties"),
        map.get("flag_encoder_properties"),
    ) {
        (Some(_), Some(_)) => {
            return Err(root
                .key("flag_encoder_properties")
                .error("duplicates flagEncoderProperties"));
        }
        (Some(value), None) => validate_flag_encoders(value, root.key("flagEncoderProperties"))?,
        (None, Some(value)) => {
            validate_flag_encoders(value, root.key("flag_encoder_properties"))?
        }
        (None, None) => {}
    }

    for section in SERVICE_SECTIONS {
        if let Some(value) = map.get(*section) {
            root.key(section).object(value)?;
        }
    }

    Ok(())
}

/// Engine settings are a flat mapping of scalars.
fn validate_engine_settings(value: &Value, at: Location<'_>) -> Result<(), ConfigError> {
    for (key, entry) in at.object(value)? {
        if !matches!(entry, Value::String(_) | Value::Number(_) | Value::Bool(_)) {
            return Err(at.key(key).error("expected string, number, or bool"));
        }
    }
    Ok(())
}

/// Flag encoders are an ordered list of objects with a string `name`.
fn validate_flag_encoders(value: &Value, at: Location<'_>) -> Result<(), ConfigError> {
    let Value::Array(entries) = value else {
        return Err(at.error("expected array"));
    };
    for (idx, entry) in entries.iter().enumerate() {
        let entry_at = at.index(idx);
        let name_at = entry_at.key("name");
        match entry_at.object(entry)?.get("name") {
            Some(Value::String(_)) => {}
            Some(_) => return Err(name_at.error("expected string")),
            None => return Err(name_at.error("missing key")),
        }
    }
    Ok(())
}

/// Position inside a document, used to label validation errors.
#[derive(Debug, Clone)]
struct Location<'a> {
    label: &'a str,
    path: String,
}

impl<'a> Location<'a> {
    fn root(label: &'a str) -> Self {
        Self {
            label,
            path: String::new(),
        }
    }

    fn key(&self, key: &str) -> Self {
        let path = if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        };
        Self {
            label: self.label,
            path,
        }
    }

    fn index(&self, idx: usize) -> Self {
        Self {
            label: self.label,
            path: format!("{}[{idx}]", self.path),
        }
    }

    fn object<'v>(&self, value: &'v Value) -> Result<&'v Map<String, Value>, ConfigError> {
        value
            .as_object()
            .ok_or_else(|| self.error("expected object"))
    }

    fn error(&self, message: &str) -> ConfigError {
        let path = if self.path.is_empty() {
            "root"
        } else {
            &self.path
        };
        ConfigError::InvalidField {
            path: format!("{}:{path}", self.label),
            message: message.to_string(),
        }
    }
}
