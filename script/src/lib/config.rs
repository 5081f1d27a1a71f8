//! Script configuration

use anyhow::{Context, Result};
use papr_lib::LiquidationEstimator;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Market assumptions of the liquidation estimator
    pub estimator: LiquidationEstimator,
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when there is none
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::warn!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&config_str)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str).context("Failed to parse config TOML")?;
        config
            .estimator
            .validate()
            .context("Invalid estimator configuration")?;
        Ok(config)
    }
}
