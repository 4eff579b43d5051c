use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Title shown in page headers and on the hub when none is configured.
pub const DEFAULT_SITE_TITLE: &str = "과학 면접 아카데미";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `index.json` and the per-subject sources.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory the pages and hub are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_site_title")]
    pub site_title: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_site_title() -> String {
    DEFAULT_SITE_TITLE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
            site_title: default_site_title(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the configured directories
        config.data_dir = Self::expand_path(&config.data_dir).unwrap_or(config.data_dir);
        config.output_dir = Self::expand_path(&config.output_dir).unwrap_or(config.output_dir);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/examdown");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
