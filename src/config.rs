// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "inspector.yaml";

/// Recognised options for the inspection programs. Every key is optional in YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InspectorConfig {
    pub species_path: PathBuf,
    pub comnames_path: PathBuf,
    /// Only checked for existence.
    pub ecology_path: PathBuf,
    pub default_row_limit: usize,
    pub max_field_width: usize,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            species_path: PathBuf::from("species.parquet"),
            comnames_path: PathBuf::from("comnames.parquet"),
            ecology_path: PathBuf::from("ecology.parquet"),
            default_row_limit: 5,
            max_field_width: 100,
        }
    }
}

impl InspectorConfig {
    /// Parse a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!(path = %path.display(), ?cfg, "loaded config");
        Ok(cfg)
    }

    /// An explicit path must exist. Without one, `inspector.yaml` is used if present,
    /// otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(p) => Self::from_file(p),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Datasets `check_parquet` walks through when called without a filename.
    pub fn default_files(&self) -> [&Path; 2] {
        [self.species_path.as_path(), self.comnames_path.as_path()]
    }
}
