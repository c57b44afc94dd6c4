// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use page_lens::config::{self, Config, ResampleFilter};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.normal_quality_filter = Some(ResampleFilter::Triangle);
//!
//! // Save to a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.normal_quality_filter, Some(ResampleFilter::Triangle));
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use image_rs::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PageLens";

/// Resampling filter, as written in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Concrete filters for each resampling quality class.
///
/// The class itself is always picked from the zoom direction; only the filter
/// behind each class is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleFilters {
    /// Used when shrinking.
    pub high: ResampleFilter,
    /// Used when enlarging.
    pub normal: ResampleFilter,
}

impl Default for ResampleFilters {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_QUALITY_FILTER,
            normal: DEFAULT_NORMAL_QUALITY_FILTER,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fit_on_load: Option<bool>,
    #[serde(default)]
    pub zoom_step: Option<f64>,
    #[serde(default)]
    pub high_quality_filter: Option<ResampleFilter>,
    #[serde(default)]
    pub normal_quality_filter: Option<ResampleFilter>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fit_on_load: Some(DEFAULT_FIT_ON_LOAD),
            zoom_step: Some(DEFAULT_ZOOM_STEP),
            high_quality_filter: Some(DEFAULT_HIGH_QUALITY_FILTER),
            normal_quality_filter: Some(DEFAULT_NORMAL_QUALITY_FILTER),
        }
    }
}

impl Config {
    /// Filters to hand to the viewport, falling back to defaults for unset keys.
    #[must_use]
    pub fn resample_filters(&self) -> ResampleFilters {
        ResampleFilters {
            high: self
                .high_quality_filter
                .unwrap_or(DEFAULT_HIGH_QUALITY_FILTER),
            normal: self
                .normal_quality_filter
                .unwrap_or(DEFAULT_NORMAL_QUALITY_FILTER),
        }
    }

    /// Zoom step clamped to the supported range.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
            .filter(|step| step.is_finite())
            .unwrap_or(DEFAULT_ZOOM_STEP)
            .clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP)
    }

    #[must_use]
    pub fn fit_on_load(&self) -> bool {
        self.fit_on_load.unwrap_or(DEFAULT_FIT_ON_LOAD)
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_filters() {
        let config = Config {
            fit_on_load: Some(false),
            zoom_step: Some(1.5),
            high_quality_filter: Some(ResampleFilter::CatmullRom),
            normal_quality_filter: Some(ResampleFilter::Triangle),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.fit_on_load, config.fit_on_load);
        assert_eq!(loaded.zoom_step, config.zoom_step);
        assert_eq!(loaded.high_quality_filter, config.high_quality_filter);
        assert_eq!(loaded.normal_quality_filter, config.normal_quality_filter);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.fit_on_load, Some(DEFAULT_FIT_ON_LOAD));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: Config = toml::from_str("fit_on_load = false").expect("valid toml");
        assert!(!config.fit_on_load());
        assert_eq!(config.resample_filters(), ResampleFilters::default());
        assert_eq!(config.zoom_step(), DEFAULT_ZOOM_STEP);
    }

    #[test]
    fn filters_use_kebab_case_names() {
        let config: Config =
            toml::from_str("high_quality_filter = \"catmull-rom\"").expect("valid toml");
        assert_eq!(config.high_quality_filter, Some(ResampleFilter::CatmullRom));
    }

    #[test]
    fn zoom_step_is_clamped() {
        let config = Config {
            zoom_step: Some(100.0),
            ..Config::default()
        };
        assert_eq!(config.zoom_step(), MAX_ZOOM_STEP);

        let config = Config {
            zoom_step: Some(f64::NAN),
            ..Config::default()
        };
        assert_eq!(config.zoom_step(), DEFAULT_ZOOM_STEP);
    }

    #[test]
    fn filter_maps_to_image_filter_type() {
        assert_eq!(FilterType::from(ResampleFilter::Lanczos3), FilterType::Lanczos3);
        assert_eq!(FilterType::from(ResampleFilter::Nearest), FilterType::Nearest);
    }
}
