use railway_routing::PropertySnapshot;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Service config with engine settings, two flag encoders, and hosting sections.
pub const SERVICE_YAML: &str = r#"
graphhopper:
  datareader.file: /data/germany-latest.osm.pbf
  graph.location: ./graph-cache
  prepare.min_network_size: 200
assets:
  overrides:
    /maps/: web/
flagEncoderProperties:
  - name: tramtrack
    railway: tram
    electrified: contact_line
    voltages: 600;750
    gauges: 1435;1000
    maxspeed: 70
  - name: freight_electric_15kvac_25kvac
    railway: rail
    electrified: contact_line
    voltages: 15000;25000
    frequencies: 16.7;16.67;50
    gauges: 1435
server:
  applicationConnectors:
    - type: http
      port: 8989
"#;

/// Write contents to a path, creating parent directories if needed.
pub fn write_config(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("dir");
    }
    fs::write(path, contents).expect("write");
}

/// Temp directory holding `SERVICE_YAML` as `config.yml`.
pub fn service_config() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("config.yml");
    write_config(&path, SERVICE_YAML);
    (temp, path)
}

/// Build a property snapshot from literal pairs.
pub fn properties(entries: &[(&str, &str)]) -> PropertySnapshot {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
