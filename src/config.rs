//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/imgedit/imgedit.toml`
//! 3. Environment variables: `IMGEDIT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;

use crate::application::ApplicationError;

/// Settings for the edit engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Appended to the input file stem to name the output (default: `_imgedit`)
    pub output_suffix: String,
    /// JPEG encoder quality, 1-100 (default: 90)
    pub jpeg_quality: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_suffix: "_imgedit".into(),
            jpeg_quality: 90,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub output_suffix: Option<String>,
    pub jpeg_quality: Option<u8>,
}

/// Get the XDG config directory for imgedit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "imgedit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("imgedit.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            output_suffix: overlay
                .output_suffix
                .clone()
                .unwrap_or_else(|| self.output_suffix.clone()),
            jpeg_quality: overlay.jpeg_quality.unwrap_or(self.jpeg_quality),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/imgedit/imgedit.toml`
    /// 3. Environment variables: `IMGEDIT_*` prefix
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(
            global_config_path().as_deref(),
            Environment::with_prefix("IMGEDIT"),
        )
    }

    /// Load with an explicit global config path and environment source.
    pub fn load_from(
        global_path: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = global_path {
            if path.exists() {
                debug!("config: loading {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current, env)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("output_suffix") {
            settings.output_suffix = val;
        }
        if let Ok(val) = config.get_string("jpeg_quality") {
            settings.jpeg_quality = val.trim().parse().map_err(|_| ApplicationError::Config {
                message: format!("jpeg_quality must be a number between 1 and 100, got {val:?}"),
            })?;
        }

        Ok(settings)
    }

    /// Reject values the engine cannot use.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.output_suffix.is_empty() {
            return Err(ApplicationError::Config {
                message: "output_suffix must not be empty (the input would be overwritten)"
                    .to_string(),
            });
        }
        if self.output_suffix.contains(|c| c == '/' || c == '\\') {
            return Err(ApplicationError::Config {
                message: format!(
                    "output_suffix must not contain path separators: {:?}",
                    self.output_suffix
                ),
            });
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ApplicationError::Config {
                message: format!(
                    "jpeg_quality must be between 1 and 100, got {}",
                    self.jpeg_quality
                ),
            });
        }
        Ok(())
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
