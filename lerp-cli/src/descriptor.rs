use anyhow::{Context, Result};
use log::*;
use serde::{Deserialize, Serialize};

use std::fs;
use std::path::Path;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_PATH: &str = "lerp.toml";

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Joints copied from the start frame instead of interpolated
    pub fixed_joints: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixed_joints: vec![amc_lerp::ROOT.to_string()],
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let data = fs::read_to_string(path)
                .with_context(|| format!("failed to open config `{}`", path.display()))?;
            return toml::from_str(&data)
                .with_context(|| format!("failed to parse config `{}`", path.display()));
        }

        let path = Path::new(DEFAULT_PATH);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).context("failed to open lerp.toml")?;
        match toml::from_str(&data) {
            Ok(config) => Ok(config),
            Err(e) => {
                error!("Failed to parse config file: {}", e);
                Ok(Self::default())
            }
        }
    }
}
