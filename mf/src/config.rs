//! Configuration for mailform

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory that `mf export` writes into
    pub export_dir: PathBuf,

    /// Refuse to render when a placeholder has no value
    pub strict: bool,

    /// Field names containing any of these are edited as multi-line text
    pub multiline_keywords: Vec<String>,

    /// Log level used when --log-level is not given
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            strict: false,
            multiline_keywords: mailtemplate::DEFAULT_MULTILINE_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            log_level: None,
        }
    }
}

/// The one key needed before logging is up
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LogLevelOnly {
    log_level: Option<String>,
}

impl Config {
    /// Read just `log_level` along the same fallback chain as [`Config::load`]
    ///
    /// Runs before logging is initialized, so unreadable files are skipped
    /// silently; `load` reports them once a subscriber exists.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let candidates: Vec<PathBuf> = match config_path {
            Some(path) => vec![path.clone()],
            None => std::iter::once(PathBuf::from("mailform.yml"))
                .chain(dirs::config_dir().map(|dir| dir.join("mailform").join("mailform.yml")))
                .collect(),
        };

        candidates
            .iter()
            .filter(|path| path.exists())
            .find_map(|path| {
                let content = fs::read_to_string(path).ok()?;
                serde_yaml::from_str::<LogLevelOnly>(&content).ok()
            })
            .and_then(|parsed| parsed.log_level)
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // An explicit path must load
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: ./mailform.yml
        let local_config = PathBuf::from("mailform.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/mailform/mailform.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("mailform").join("mailform.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}
