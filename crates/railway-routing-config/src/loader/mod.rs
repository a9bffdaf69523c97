//! Config document loading.
//!
//! Reads a YAML or JSON5 service document, checks its shape against the
//! expected sections, and decodes it into a `ConfigDocument`.

mod schema;

#[cfg(test)]
mod tests;

use crate::{ConfigDocument, ConfigError};
use directories::UserDirs;
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config filename looked up when no path is given.
const DEFAULT_CONFIG_FILE: &str = "railway-routing.yml";
/// Default config directory under the user's home.
const DEFAULT_CONFIG_DIR: &str = ".railway-routing";

/// Serialization format of a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json5,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yml") | Some("yaml") => Ok(ConfigFormat::Yaml),
            Some("json") | Some("json5") => Ok(ConfigFormat::Json5),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn parse(self, contents: &str) -> Result<Value, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        let value: Value = match self {
            ConfigFormat::Yaml => serde_yaml::from_str(contents)?,
            ConfigFormat::Json5 => json5::from_str(contents)?,
        };
        // A YAML document holding only `~` decodes to null.
        Ok(match value {
            Value::Null => Value::Object(serde_json::Map::new()),
            other => other,
        })
    }
}

/// Candidate config locations, in lookup order, for a working directory.
pub fn default_config_paths(cwd: impl AsRef<Path>) -> Vec<PathBuf> {
    let mut paths = vec![cwd.as_ref().join(DEFAULT_CONFIG_FILE)];
    if let Some(dirs) = UserDirs::new() {
        paths.push(
            dirs.home_dir()
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILE),
        );
    }
    paths
}

impl ConfigDocument {
    /// Load a document from a path, picking the format from its extension.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("loading config from path: {}", path.display());
        let format = ConfigFormat::from_path(path)?;
        let contents = fs::read_to_string(path)?;
        let value = format.parse(&contents)?;
        document_from_value(value, &path.display().to_string())
    }

    /// Load a document from raw contents in the given format.
    pub fn load_from_str(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        debug!(
            "loading config from raw contents (format={:?}, len={})",
            format,
            contents.len()
        );
        let value = format.parse(contents)?;
        document_from_value(value, "config")
    }

    /// Validate document invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, _) in self.engine_settings() {
            if key.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "engine setting keys must not be empty".to_string(),
                ));
            }
        }
        for (idx, encoder) in self.flag_encoder_configs().iter().enumerate() {
            if encoder.name.trim().is_empty() {
                return Err(ConfigError::InvalidField {
                    path: format!("flagEncoderProperties[{idx}].name"),
                    message: "flag encoder name must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn document_from_value(value: Value, label: &str) -> Result<ConfigDocument, ConfigError> {
    schema::validate_document_schema(&value, label)?;
    let document: ConfigDocument = serde_json::from_value(value)?;
    document.validate()?;
    debug!(
        "config decoded (engine_settings={}, flag_encoders={})",
        document.engine_settings().len(),
        document.flag_encoder_configs().len()
    );
    Ok(document)
}
