//! Tests for config document loading.

use super::*;
use crate::{EngineValue, FlagEncoderConfig};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SERVICE_YAML: &str = r#"
graphhopper:
  datareader.file: /data/germany-latest.osm.pbf
  prepare.min_network_size: 200
  routing.ch.disabling_allowed: true
assets:
  overrides:
    /maps/: web/
flagEncoderProperties:
  - name: tramtrack
    electrified: contact_line
  - name: freight_diesel
server:
  applicationConnectors:
    - type: http
logging:
  level: INFO
"#;

/// Write contents to a path, creating parent directories if needed.
fn write_config(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("dir");
    }
    fs::write(path, contents).expect("write");
}

#[test]
fn parse_empty_document() {
    let document = ConfigDocument::load_from_str("", ConfigFormat::Yaml).expect("config");
    assert!(document.engine_settings().is_empty());
    assert!(document.flag_encoder_configs().is_empty());
    assert_eq!(document.asset_settings(), &serde_json::json!({}));
}

#[test]
fn parse_service_yaml() {
    let document = ConfigDocument::load_from_str(SERVICE_YAML, ConfigFormat::Yaml).expect("config");

    let settings = document.engine_settings();
    assert_eq!(
        settings.get_str("datareader.file"),
        Some("/data/germany-latest.osm.pbf")
    );
    assert_eq!(
        settings.get("prepare.min_network_size"),
        Some(&EngineValue::Integer(200))
    );
    assert_eq!(
        settings.get("routing.ch.disabling_allowed"),
        Some(&EngineValue::Bool(true))
    );

    let encoders = document.flag_encoder_configs();
    assert_eq!(encoders.len(), 2);
    assert_eq!(encoders[0].name, "tramtrack");
    assert_eq!(
        encoders[0].property("electrified"),
        Some(&serde_json::json!("contact_line"))
    );
    assert_eq!(encoders[1].name, "freight_diesel");

    assert_eq!(
        document.asset_settings()["overrides"]["/maps/"],
        serde_json::json!("web/")
    );
    assert!(document.service_sections().contains_key("server"));
    assert!(document.service_sections().contains_key("logging"));
}

#[test]
fn parse_json5_with_snake_case_alias() {
    let json5 = r#"{
        graphhopper: { "graph.location": "./graph-cache" },
        flag_encoder_properties: [ { name: "tramtrack", railway: "tram" } ],
    }"#;
    let document = ConfigDocument::load_from_str(json5, ConfigFormat::Json5).expect("config");
    assert_eq!(
        document.engine_settings().get_str("graph.location"),
        Some("./graph-cache")
    );
    assert_eq!(document.flag_encoder_configs()[0].name, "tramtrack");
}

#[test]
fn rejects_unknown_top_level_key() {
    let err = ConfigDocument::load_from_str("unexpected: true", ConfigFormat::Yaml).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("unknown key"));
    assert!(msg.contains("unexpected"));
}

#[test]
fn rejects_null_engine_settings() {
    let err = ConfigDocument::load_from_str("graphhopper: ~", ConfigFormat::Yaml).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("graphhopper"));
    assert!(msg.contains("expected object"));
}

#[test]
fn rejects_nested_engine_setting() {
    let yaml = "graphhopper:\n  profiles:\n    - name: rail\n";
    let err = ConfigDocument::load_from_str(yaml, ConfigFormat::Yaml).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("graphhopper.profiles"));
}

#[test]
fn rejects_flag_encoder_without_name() {
    let yaml = "flagEncoderProperties:\n  - railway: tram\n";
    let err = ConfigDocument::load_from_str(yaml, ConfigFormat::Yaml).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("flagEncoderProperties[0].name"));
}

#[test]
fn rejects_blank_flag_encoder_name() {
    let yaml = "flagEncoderProperties:\n  - name: \" \"\n";
    let err = ConfigDocument::load_from_str(yaml, ConfigFormat::Yaml).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidField { .. }));
}

#[test]
fn rejects_both_flag_encoder_spellings() {
    let yaml = "flagEncoderProperties: []\nflag_encoder_properties: []\n";
    let err = ConfigDocument::load_from_str(yaml, ConfigFormat::Yaml).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("duplicates flagEncoderProperties"));
}

#[test]
fn load_from_path_picks_format_from_extension() {
    let temp = TempDir::new().expect("tmp");
    let yaml_path = temp.path().join("config").join("rail.yml");
    write_config(&yaml_path, SERVICE_YAML);
    let json_path = temp.path().join("rail.json5");
    write_config(&json_path, "{ graphhopper: { \"graph.location\": \"/var/graph\" } }");

    let from_yaml = ConfigDocument::load_from_path(&yaml_path).expect("yaml");
    assert_eq!(from_yaml.flag_encoder_configs().len(), 2);

    let from_json = ConfigDocument::load_from_path(&json_path).expect("json5");
    assert_eq!(
        from_json.engine_settings().get_str("graph.location"),
        Some("/var/graph")
    );
}

#[test]
fn load_from_path_rejects_unknown_extension() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("rail.toml");
    write_config(&path, "");
    let err = ConfigDocument::load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

#[test]
fn load_from_path_reports_missing_file() {
    let temp = TempDir::new().expect("tmp");
    let err = ConfigDocument::load_from_path(temp.path().join("missing.yml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFailed(_)));
}

#[test]
fn default_paths_start_with_cwd() {
    let temp = TempDir::new().expect("tmp");
    let paths = default_config_paths(temp.path());
    assert_eq!(paths[0], temp.path().join(DEFAULT_CONFIG_FILE));
}

/// Serialized documents keep the service field names.
#[test]
fn serializes_with_document_field_names() {
    let document = ConfigDocument::load_from_str(SERVICE_YAML, ConfigFormat::Yaml).expect("config");
    let value = serde_json::to_value(&document).expect("json");
    assert!(value.get("graphhopper").is_some());
    assert!(value.get("flagEncoderProperties").is_some());
    assert!(value.get("server").is_some());
    let reloaded: ConfigDocument = serde_json::from_value(value).expect("reload");
    assert_eq!(reloaded, document);
}

/// Integers beyond `i64` stay integers instead of degrading to floats.
#[test]
fn large_integers_keep_precision() {
    let yaml = "graphhopper:\n  big: 18446744073709551615\n  ratio: 1.5\n  offset: -3\n";
    let document = ConfigDocument::load_from_str(yaml, ConfigFormat::Yaml).expect("config");

    let settings = document.engine_settings();
    assert_eq!(settings.get("big"), Some(&EngineValue::Unsigned(u64::MAX)));
    assert_eq!(settings.get("ratio"), Some(&EngineValue::Float(1.5)));
    assert_eq!(settings.get("offset"), Some(&EngineValue::Integer(-3)));
    assert_eq!(settings.get("big").expect("big").to_string(), "18446744073709551615");

    let rendered = serde_json::to_string(&document).expect("json");
    assert!(rendered.contains("18446744073709551615"));
    // JSON output is a valid YAML flow document.
    let reloaded = ConfigDocument::load_from_str(&rendered, ConfigFormat::Yaml).expect("reload");
    assert_eq!(reloaded.engine_settings(), settings);
}

/// A document assembled in code loads back identically from its serialized form.
#[test]
fn built_document_survives_serialization() {
    let document = ConfigDocument::builder()
        .engine_setting("graph.location", "./graph-cache")
        .engine_setting("prepare.min_network_size", 200_i64)
        .asset_settings(serde_json::json!({ "overrides": { "/maps/": "web/" } }))
        .flag_encoder(
            FlagEncoderConfig::new("tramtrack")
                .with_property("railway", serde_json::json!("tram"))
                .with_property("maxspeed", serde_json::json!(70)),
        )
        .service_section("server", serde_json::json!({ "applicationConnectors": [] }))
        .build();

    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("built.yml");
    write_config(&path, &serde_json::to_string_pretty(&document).expect("json"));
    let loaded = ConfigDocument::load_from_path(&path).expect("load");

    assert_eq!(loaded, document);
    assert!(loaded.engine_settings().contains_key("graph.location"));
    assert!(!loaded.engine_settings().contains_key("datareader.file"));
    assert_eq!(
        loaded.flag_encoder_configs()[0].property("maxspeed"),
        Some(&serde_json::json!(70))
    );
    assert_eq!(
        loaded.asset_settings()["overrides"]["/maps/"],
        serde_json::json!("web/")
    );
    assert!(loaded.service_sections().contains_key("server"));
}
