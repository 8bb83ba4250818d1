use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::loader::ClassLoader;

/// One `[[loaders]]` table in config.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderEntry {
    /// Namespace prefix without trailing separator; empty for a catch-all loader.
    #[serde(default)]
    pub namespace: String,
    /// Base directory of the namespace; empty to resolve through `search_path`.
    #[serde(default)]
    pub include_root: PathBuf,
    /// Overrides `default_extension` for this loader.
    #[serde(default)]
    pub extension: Option<String>,
    /// Map underscores in class names to directories (default true).
    #[serde(default)]
    pub underscore_dirs: Option<bool>,
}

impl LoaderEntry {
    pub fn to_loader(&self, default_extension: &str) -> ClassLoader {
        ClassLoader::with_options(
            self.namespace.clone(),
            self.include_root.clone(),
            self.extension.as_deref().unwrap_or(default_extension),
            self.underscore_dirs.unwrap_or(true),
        )
    }
}

/// Global configuration loaded from `~/.config/psr0/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Psr0Config {
    /// Directories searched, in order, by loaders without an include root.
    #[serde(default)]
    pub search_path: Vec<PathBuf>,
    /// Extension for loaders that do not set one (None = ".php").
    #[serde(default)]
    pub default_extension: Option<String>,
    #[serde(default)]
    pub loaders: Vec<LoaderEntry>,
}

impl Default for Psr0Config {
    fn default() -> Self {
        Self {
            search_path: vec![PathBuf::from(".")],
            default_extension: None,
            loaders: Vec::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("psr0")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Psr0Config> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = Psr0Config::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<Psr0Config> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: Psr0Config =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!(loaders = cfg.loaders.len(), "loaded config from {}", path.display());
    Ok(cfg)
}
