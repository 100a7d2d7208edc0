//! Tool configuration (tinct.yaml) parsing.
//!
//! Holds defaults for the command line tool: the contrast ratio `pick`
//! aims for, the output format, and the blend mode used by `shade`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TinctError};
use crate::types::{Format, DEFAULT_MIN_RATIO};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "tinct.yaml";

/// Configuration loaded from tinct.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum contrast ratio for `pick`.
    #[serde(default = "default_min_ratio")]
    pub min_ratio: f64,

    /// Output format for printed colours.
    #[serde(default)]
    pub format: Format,

    /// Blend raw channel values instead of squared ones when shading.
    #[serde(default)]
    pub linear: bool,
}

fn default_min_ratio() -> f64 {
    DEFAULT_MIN_RATIO
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_ratio: default_min_ratio(),
            format: Format::default(),
            linear: false,
        }
    }
}

impl Config {
    /// Load config from a tinct.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TinctError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load an explicit config file, or tinct.yaml from `dir` if it exists.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path: PathBuf = dir.join(CONFIG_FILE);
        if default_path.is_file() {
            log::debug!("loading config from {}", default_path.display());
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(content).map_err(|e| TinctError::Config {
            message: format!("Invalid config: {}", e),
            help: Some("Check tinct.yaml syntax".to_string()),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.min_ratio.is_finite() || self.min_ratio <= 0.0 {
            return Err(TinctError::Config {
                message: format!("min_ratio must be a positive number, got {}", self.min_ratio),
                help: Some("WCAG ratios run from 1 to 21; 4.5 is AA for body text".to_string()),
            });
        }
        Ok(())
    }
}
