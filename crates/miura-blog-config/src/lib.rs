use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SITE_NAME: &str = "三浦海の学校";
pub const DEFAULT_CHARS_PER_MINUTE: u32 = 500;

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

    #[error("Invalid config file at {config_path}: {reason}")]
    ConfigInvalid {
        config_path: PathBuf,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name used in SEO titles and descriptions
    #[serde(default = "default_site_name")]
    pub site_name: String,
    /// Reading speed for reading-time estimates
    #[serde(default = "default_chars_per_minute")]
    pub chars_per_minute: u32,
    /// Directory relative input paths are resolved against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

fn default_site_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}

fn default_chars_per_minute() -> u32 {
    DEFAULT_CHARS_PER_MINUTE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            chars_per_minute: default_chars_per_minute(),
            export_dir: None,
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

        if config.chars_per_minute == 0 {
            return Err(ConfigError::ConfigInvalid {
                config_path: config_path.to_path_buf(),
                reason: "chars_per_minute must be greater than zero".to_string(),
            });
        }

        // Expand shell variables and tilde in the export directory
        config.export_dir = config
            .export_dir
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Config from `config_path` (or the default location), falling back to
    /// defaults when the file doesn't exist
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let loaded = match config_path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::load()?,
        };
        Ok(loaded.unwrap_or_default())
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
        let config_dir = shellexpand::tilde("~/.config/miura-blog");
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
