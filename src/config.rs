use crate::domain::PrereleaseLabel;
use crate::error::{RelverError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "relver.toml";

/// Represents the complete configuration for relver.
///
/// Contains the version file location, prerelease policy and output settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_version_file")]
    pub version_file: PathBuf,

    #[serde(default)]
    pub prerelease: PrereleaseConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_version_file() -> PathBuf {
    PathBuf::from("version.txt")
}

fn default_prerelease_label() -> String {
    "beta".to_string()
}

/// Prerelease policy.
///
/// `label` starts fresh prerelease series; `allow` is the default answer to
/// whether prereleases get published.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PrereleaseConfig {
    #[serde(default = "default_prerelease_label")]
    pub label: String,

    #[serde(default)]
    pub allow: bool,
}

impl Default for PrereleaseConfig {
    fn default() -> Self {
        PrereleaseConfig {
            label: default_prerelease_label(),
            allow: false,
        }
    }
}

impl PrereleaseConfig {
    /// The configured label, which must be one of the recognized labels.
    pub fn fresh_label(&self) -> Result<PrereleaseLabel> {
        let label = PrereleaseLabel::parse(&self.label)
            .map_err(|e| RelverError::config(format!("prerelease.label: {}", e)))?;
        if !label.is_recognized() {
            return Err(RelverError::config(format!(
                "prerelease.label '{}' is not one of alpha, beta, rc",
                self.label
            )));
        }
        Ok(label)
    }
}

/// How command results are printed
#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    /// Azure Pipelines `##vso[task.setvariable]` logging commands
    Pipeline,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_file: default_version_file(),
            prerelease: PrereleaseConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Parses configuration text and validates the prerelease label.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(text).map_err(|e| RelverError::config(e.to_string()))?;
        config.prerelease.fresh_label()?;
        Ok(config)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `relver.toml` in current directory
/// 3. `relver/relver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(),
    };

    let Some(path) = path else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let text = fs::read_to_string(&path)?;
    Config::from_toml(&text).map_err(|e| match e {
        RelverError::Config(msg) => RelverError::config(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

fn discover_config() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("relver").join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
