//! Panel configuration: reference ranges plus scoring weights.
//!
//! Reads hormonyx.toml from the current directory or the path in the
//! HORMONYX_CONFIG env var. Every section is optional and falls back to the
//! built-in defaults. Reference ranges in the file are layered over the
//! built-in table, so a file only needs the analytes it changes.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{HormonyxError, Result};
use crate::reference::ReferenceTable;
use crate::weight_config::WeightConfig;

pub const CONFIG_ENV_VAR: &str = "HORMONYX_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "hormonyx.toml";

/// Everything the engine consumes from the outside world.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Analyte reference ranges
    #[serde(default, deserialize_with = "overlay_on_defaults")]
    pub reference_ranges: ReferenceTable,

    /// Intra-sub-score weights
    #[serde(default)]
    pub weights: WeightConfig,
}

fn overlay_on_defaults<'de, D>(deserializer: D) -> std::result::Result<ReferenceTable, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = ReferenceTable::deserialize(deserializer)?;
    Ok(ReferenceTable::default().overlay(overrides))
}

impl PanelConfig {
    /// Load from YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_json(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file
    pub fn from_toml(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load by file extension (`.toml`, `.yaml`/`.yml`, `.json`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(path),
            Some("yaml") | Some("yml") => Self::from_yaml(path),
            Some("json") => Self::from_json(path),
            other => Err(HormonyxError::Config(format!(
                "unsupported config extension {:?} for {}",
                other,
                path.display()
            ))),
        }
    }

    /// Resolve the config path from HORMONYX_CONFIG or the working
    /// directory, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        if !path.exists() {
            info!("No panel config at {}; using built-in defaults", path.display());
            return Ok(Self::default());
        }

        info!("Loading panel config from {}", path.display());
        Self::from_path(&path)
    }

    /// Save to YAML file
    pub fn to_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Hard errors for invalid numbers; warnings for weight keys that will
    /// silently score 0 against this reference table.
    pub fn validate(&self) -> Result<()> {
        self.reference_ranges.validate()?;
        self.weights.validate()?;
        self.weights.check_against(&self.reference_ranges);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
