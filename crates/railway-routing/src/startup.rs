//! Startup sequence: load the document, apply overrides, hand off to the engine.

use crate::properties::PropertySnapshot;
use anyhow::{Context, bail};
use log::{debug, info};
use railway_routing_config::{ConfigDocument, OverrideReport, apply_overrides, default_config_paths};
use std::path::{Path, PathBuf};

/// Routing engine initialized from the effective config document.
///
/// The engine reads the document during initialization and must not expect
/// further changes to it afterwards.
pub trait RoutingEngine {
    fn initialize(&mut self, document: &ConfigDocument) -> anyhow::Result<()>;
}

/// Effective config after property overrides, plus where it came from.
#[derive(Debug, Clone)]
pub struct PreparedConfig {
    pub source: PathBuf,
    pub document: ConfigDocument,
    pub report: OverrideReport,
}

impl PreparedConfig {
    /// Human-readable summary printed by `check`.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("config: {}", self.source.display()),
            "engine settings:".to_string(),
        ];
        for (key, value) in self.document.engine_settings() {
            lines.push(format!("  {key} = {value}"));
        }
        let encoders = self
            .document
            .flag_encoder_configs()
            .iter()
            .map(|encoder| encoder.name.as_str())
            .collect::<Vec<_>>();
        lines.push(format!("flag encoders: {}", encoders.join(", ")));
        if !self.report.applied.is_empty() {
            lines.push(format!("overridden: {}", self.report.applied.join(", ")));
        }
        if !self.report.unsupported.is_empty() {
            lines.push(format!("ignored: {}", self.report.unsupported.join(", ")));
        }
        lines.join("\n")
    }

    /// Effective document as pretty-printed JSON, as printed by `check --json`.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(&self.document).context("failed to render config")
    }
}

/// Pick the config file: the explicit path, or the first default that exists.
pub fn resolve_config_path(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let candidates = default_config_paths(cwd);
    for candidate in &candidates {
        if candidate.exists() {
            debug!("using default config path: {}", candidate.display());
            return Ok(candidate.clone());
        }
    }
    let searched = candidates
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    bail!("no config file given and none found (searched: {searched})");
}

/// Load the document at `path` and apply property overrides to it.
///
/// Override errors are returned without added context so the operator sees
/// the offending key and the fix as-is.
pub fn prepare_config(
    path: &Path,
    properties: &PropertySnapshot,
) -> anyhow::Result<PreparedConfig> {
    let mut document = ConfigDocument::load_from_path(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    let report = apply_overrides(&mut document, properties)?;
    info!(
        "config prepared (source={}, engine_settings={}, flag_encoders={}, overrides={})",
        path.display(),
        document.engine_settings().len(),
        document.flag_encoder_configs().len(),
        report.applied.len()
    );
    Ok(PreparedConfig {
        source: path.to_path_buf(),
        document,
        report,
    })
}

/// Run the full startup sequence against `engine`.
pub fn start_engine<E>(
    engine: &mut E,
    path: &Path,
    properties: &PropertySnapshot,
) -> anyhow::Result<PreparedConfig>
where
    E: RoutingEngine + ?Sized,
{
    let prepared = prepare_config(path, properties)?;
    engine
        .initialize(&prepared.document)
        .context("routing engine failed to initialize")?;
    info!("routing engine initialized");
    Ok(prepared)
}
