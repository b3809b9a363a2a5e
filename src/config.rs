use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "scaffold.toml";

/// Optional per-project overrides, read from `scaffold.toml` at the project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub inputs_dir: String,
    pub bin_dir: String,
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs_dir: "inputs".to_string(),
            bin_dir: "src/bin".to_string(),
            language: "rust".to_string(),
        }
    }
}

impl Config {
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    pub fn load(root: &Path) -> Result<Config> {
        let path = Self::config_path(root);
        if !path.exists() {
            tracing::debug!("No {} at {}, using defaults", CONFIG_FILE, root.display());
            return Ok(Config::default());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!(?config, "Loaded {}", path.display());
        Ok(config)
    }
}

/// The project this tool ships in; generated days become its binaries.
pub fn default_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn expand_root(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(raw),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => PathBuf::from(raw),
    }
}
