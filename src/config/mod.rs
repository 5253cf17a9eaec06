//! Configuration management for mediacheck
//!
//! This module handles loading, parsing, and validating mediacheck
//! configuration from YAML files. Settings cover the per-kind size limits and
//! MIME detection behavior; every field has a default so an empty (or absent)
//! file is valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for mediacheck
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MediaCheckConfig {
    /// Size limits per media kind
    #[serde(default)]
    pub limits: LimitsConfig,

    /// MIME detection settings
    #[serde(default)]
    pub detection: DetectionConfig,
}

/// Size limits in bytes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum accepted image size in bytes
    #[serde(default = "default_image_max_bytes")]
    pub image_max_bytes: u64,

    /// Maximum accepted video size in bytes
    #[serde(default = "default_video_max_bytes")]
    pub video_max_bytes: u64,
}

/// Default image limit (5 MiB)
fn default_image_max_bytes() -> u64 {
    5 * 1024 * 1024
}

/// Default video limit (20 MiB)
fn default_video_max_bytes() -> u64 {
    20 * 1024 * 1024
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            image_max_bytes: default_image_max_bytes(),
            video_max_bytes: default_video_max_bytes(),
        }
    }
}

/// MIME detection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Sniff file content for magic numbers before falling back to the
    /// file extension
    #[serde(default = "default_sniff_content")]
    pub sniff_content: bool,

    /// Follow symbolic links when walking directories
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_sniff_content() -> bool {
    true
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            sniff_content: default_sniff_content(),
            follow_symlinks: false,
        }
    }
}

impl MediaCheckConfig {
    /// Load configuration: an explicit path must parse, otherwise fall back
    /// to the discovered project file or defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_file(&PathBuf::from(p)),
            None => Ok(Self::load_or_default()),
        }
    }

    /// Load configuration from file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: MediaCheckConfig = serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yml::to_string(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Find configuration file in current directory or parent directories
    pub fn find_config_file() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let config_path = current.join("mediacheck.yml");
            if config_path.exists() {
                return Some(config_path);
            }

            let config_path = current.join(".mediacheck.yml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load configuration from found file or use defaults
    pub fn load_or_default() -> Self {
        if let Some(config_path) = Self::find_config_file() {
            Self::load_from_file(&config_path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.limits.image_max_bytes == 0 {
            anyhow::bail!("Image size limit cannot be 0");
        }
        if self.limits.video_max_bytes == 0 {
            anyhow::bail!("Video size limit cannot be 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
