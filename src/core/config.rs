//! Configuration loaded from .islander_config.json
//!
//! Lookup order: an explicit path, then `./.islander_config.json`, then
//! `<config dir>/islander/config.json`. Relative data paths inside a config
//! file are resolved against that file's directory.

use crate::core::dataset::VillagerDataset;
use crate::core::error::{CompatError, Result, ResultExt};
use crate::core::rules::{PersonalityTable, RuleSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".islander_config.json";

/// When to colour marks and verdicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Only when stdout and stderr are both terminals
    #[default]
    Auto,
    Always,
    Never,
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Details table plus compatibility grid
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Villager dataset; the bundled one when unset
    pub dataset: Option<PathBuf>,
    /// Personality compatibility table; the bundled one when unset
    pub personality_table: Option<PathBuf>,
    pub color: ColorMode,
    pub format: OutputFormat,
}

impl Config {
    /// Default search paths, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(LOCAL_CONFIG_FILE));
        }
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("islander/config.json"));
        }
        paths
    }

    /// Load an explicit config file. A missing file is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CompatError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let json = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&json)
            .map_err(|e| CompatError::configuration(format!("{}: {}", path.display(), e)))?;

        if let Some(base) = path.parent() {
            config.dataset = config.dataset.map(|p| base.join(p));
            config.personality_table = config.personality_table.map(|p| base.join(p));
        }
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Explicit path if given, otherwise the first default path that
    /// exists, otherwise defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        Self::discover_in(explicit, &Self::search_paths())
    }

    pub fn discover_in(explicit: Option<&Path>, search_paths: &[PathBuf]) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match search_paths.iter().find(|p| p.is_file()) {
            Some(path) => Self::from_file(path),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_dataset(&self) -> Result<VillagerDataset> {
        match &self.dataset {
            Some(path) => VillagerDataset::from_file(path),
            None => VillagerDataset::bundled(),
        }
    }

    pub fn load_rules(&self) -> Result<RuleSet> {
        let table = match &self.personality_table {
            Some(path) => PersonalityTable::from_file(path),
            None => PersonalityTable::bundled(),
        }
        .context("personality table")?;
        Ok(RuleSet::new(table))
    }
}
