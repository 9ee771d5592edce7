use crate::models::LauncherConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Name of the persisted configuration file inside the config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Resolve the launcher's config directory from the environment:
/// `$XDG_CONFIG_HOME/xivbench`, falling back to `$HOME/.config/xivbench`.
pub fn default_config_dir() -> Result<Utf8PathBuf> {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|value| !value.is_empty())
        .map(Utf8PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .filter(|value| !value.is_empty())
                .map(|home| Utf8PathBuf::from(home).join(".config"))
        })
        .context("Neither XDG_CONFIG_HOME nor HOME is set")?;

    Ok(base.join("xivbench"))
}

/// Configuration manager for the launcher's single YAML config file.
///
/// The file carries three sections (`benchmark`, `wine`, `graphics`); see
/// [`LauncherConfig`]. Loading is forgiving: a missing or unparseable file
/// yields defaults, and individual graphics values fail open at the typed
/// layer.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a ConfigManager rooted at `config_dir`, creating the
    /// directory if needed.
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            config_path: config_dir.join(CONFIG_FILE_NAME),
            config_dir,
        })
    }

    /// Load the configuration, falling back to defaults when the file is
    /// absent or does not parse.
    pub fn load(&self) -> Result<LauncherConfig> {
        if !self.config_path.exists() {
            tracing::info!(
                "Config file not found at {}, using defaults",
                self.config_path
            );
            return Ok(LauncherConfig::default());
        }

        let file_contents = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config: {}", self.config_path))?;

        match serde_yaml_ng::from_str(&file_contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", self.config_path);
                Ok(config)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse config {}, using defaults: {}",
                    self.config_path,
                    e
                );
                Ok(LauncherConfig::default())
            }
        }
    }

    /// Save the configuration. Called once, at normal exit.
    pub fn save(&self, config: &LauncherConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize config to YAML")?;

        fs::write(&self.config_path, yaml_string)
            .with_context(|| format!("Failed to write config: {}", self.config_path))?;

        tracing::info!("Saved config to {}", self.config_path);
        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Get the configuration file path.
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}
