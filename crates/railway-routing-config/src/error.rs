//! Error types for config loading and validation.

use thiserror::Error;

/// Errors returned while loading, validating, or overriding config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading a config file failed.
    #[error("failed to read config: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// Parsing a JSON5 config document failed.
    #[error("failed to parse config: {0}")]
    ParseFailed(#[from] json5::Error),
    /// Parsing a YAML config document failed.
    #[error("failed to parse config: {0}")]
    YamlParseFailed(#[from] serde_yaml::Error),
    /// Converting JSON values failed.
    #[error("failed to decode config: {0}")]
    DecodeFailed(#[from] serde_json::Error),
    /// The file extension does not name a supported document format.
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
    /// A specific field failed validation.
    #[error("invalid config at {path}: {message}")]
    InvalidField { path: String, message: String },
    /// Generic validation failure.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// A property used the bare engine prefix instead of the wrapped one.
    #[error(
        "property `{key}` is not applied: prefix override properties with `{expected}` instead of `{found}`"
    )]
    MisdirectedOverride {
        key: String,
        expected: String,
        found: String,
    },
}
