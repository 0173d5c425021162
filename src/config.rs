// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedAtlas";

/// Zoom increment applied by the lightbox zoom-in/out controls.
pub const DEFAULT_ZOOM_STEP: f32 = 0.2;

/// Bounds for a user-supplied `zoom_step` so a persisted config cannot
/// request nonsensical increments.
pub const MIN_ZOOM_STEP: f32 = 0.05;
pub const MAX_ZOOM_STEP: f32 = 1.0;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Dataset source override (path or URL). The CLI argument takes
    /// precedence over this value.
    pub dataset_path: Option<String>,
    #[serde(default)]
    pub zoom_step: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: None,
            zoom_step: Some(DEFAULT_ZOOM_STEP),
        }
    }
}

/// Clamps a persisted zoom step into the supported range.
pub fn clamp_zoom_step(value: f32) -> f32 {
    value.clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP)
}

impl Config {
    /// Clamps persisted values into their supported ranges. Returns
    /// true when something changed and the file should be rewritten.
    pub fn normalize(&mut self) -> bool {
        let Some(step) = self.zoom_step else {
            return false;
        };
        let clamped = clamp_zoom_step(step);
        self.zoom_step = Some(clamped);
        clamped != step
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
