// File: src/config.rs
// Palette settings, persisted as TOML in the platform config dir
use crate::color_utils::{OverflowPolicy, PALETTE, Rgb, UNKNOWN_COLOR};
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: Vec<Rgb>,
    pub overflow: OverflowPolicy,
    pub fallback_color: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: PALETTE.to_vec(),
            overflow: OverflowPolicy::default(),
            fallback_color: UNKNOWN_COLOR,
        }
    }
}

impl Config {
    /// `<config_dir>/vizglue/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "vizglue").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Loads from the default path. No config dir or no file means defaults.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("No config directory available, using default palette");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{}'", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::default_path().context("No config directory available")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create '{}'", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, raw).with_context(|| format!("Failed to write config '{}'", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            bail!("Palette must contain at least one color");
        }
        Ok(())
    }
}
