// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Start-up configuration.
//!
//! Sources, later ones winning:
//! - built-in defaults
//! - optional `resume-gate.toml` in the working directory
//! - `RESUME_GATE_*` environment variables (e.g. `RESUME_GATE_DATA_DIR`)

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Base name of the optional configuration file.
const CONFIG_FILE: &str = "resume-gate";
const ENV_PREFIX: &str = "RESUME_GATE";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding `storage.json`. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            window_width: 900.0,
            window_height: 720.0,
        }
    }
}

impl AppConfig {
    /// Load from the config file and environment.
    pub fn load() -> Result<Self> {
        Self::load_from(
            Config::builder().add_source(File::with_name(CONFIG_FILE).required(false)),
            environment(),
        )
    }

    fn load_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        env: Environment,
    ) -> Result<Self> {
        let settings = builder
            .add_source(env)
            .build()
            .context("Failed to read configuration")?;
        let cfg: AppConfig = settings
            .try_deserialize()
            .context("Invalid configuration values")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Resolved storage directory.
    ///
    /// Falls back to `./.resume-gate` when the platform has no data dir.
    pub fn storage_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|d| d.join("resume-gate"))
            .unwrap_or_else(|| PathBuf::from(".resume-gate"))
    }

    fn validate(&self) -> Result<()> {
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            bail!(
                "window size must be positive, got {}x{}",
                self.window_width,
                self.window_height
            );
        }
        if self
            .data_dir
            .as_ref()
            .is_some_and(|d| d.as_os_str().is_empty())
        {
            bail!("data_dir cannot be empty");
        }
        Ok(())
    }
}

/// `RESUME_GATE_DATA_DIR` maps to `data_dir`; `__` separates nested keys.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}
