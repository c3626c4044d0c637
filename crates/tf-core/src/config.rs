//! Editor configuration
//!
//! Stored as YAML. Default location: ~/.config/tf-editor/config.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::channel::{DEFAULT_MAX_HANDLES, MIN_SEEDED_HANDLES};
use crate::geometry::{DEFAULT_HEIGHT, DEFAULT_SCALING, DEFAULT_WIDTH};

/// Default number of samples along the domain
pub const DEFAULT_DOMAIN_SIZE: usize = 256;

/// When an insert gesture reports a change
///
/// A secondary click on empty space historically reports "changed" even
/// when the click fell outside the canvas and nothing was inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertReport {
    /// Report a change for every insert gesture, inserted or not
    #[default]
    Always,
    /// Report a change only when a point was actually inserted
    OnMutation,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Number of discrete samples along x
    pub domain_size: usize,
    /// Logical canvas width
    pub width: f32,
    /// Logical canvas height
    pub height: f32,
    /// Pixel scaling applied to the canvas and handles
    pub scaling: f32,
    /// Maximum control points per channel
    pub max_handles: usize,
    /// Start with focus mode enabled
    pub focus_mode: bool,
    /// Change-reporting policy for insert gestures
    pub insert_report: InsertReport,
    /// Directory for exported tables (current directory if unset)
    pub export_dir: Option<PathBuf>,
    /// Base name for exported tables
    pub export_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            domain_size: DEFAULT_DOMAIN_SIZE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scaling: DEFAULT_SCALING,
            max_handles: DEFAULT_MAX_HANDLES,
            focus_mode: false,
            insert_report: InsertReport::Always,
            export_dir: None,
            export_name: String::from("transfer_function"),
        }
    }
}

impl EditorConfig {
    /// Replace out-of-range values with defaults
    pub fn validate(&mut self) {
        let defaults = Self::default();

        if self.domain_size == 0 {
            log::warn!("config: domain_size must be at least 1, using {}", defaults.domain_size);
            self.domain_size = defaults.domain_size;
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            log::warn!("config: invalid width {}, using {}", self.width, defaults.width);
            self.width = defaults.width;
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            log::warn!("config: invalid height {}, using {}", self.height, defaults.height);
            self.height = defaults.height;
        }
        if !(self.scaling.is_finite() && self.scaling > 0.0) {
            log::warn!("config: invalid scaling {}, using {}", self.scaling, defaults.scaling);
            self.scaling = defaults.scaling;
        }
        if self.max_handles < MIN_SEEDED_HANDLES {
            log::warn!(
                "config: max_handles {} can't hold the default curves, using {}",
                self.max_handles,
                MIN_SEEDED_HANDLES
            );
            self.max_handles = MIN_SEEDED_HANDLES;
        }
        if self.export_name.trim().is_empty() {
            self.export_name = defaults.export_name;
        }
    }

    /// Export base path: `export_dir/export_name`
    pub fn export_base(&self) -> PathBuf {
        match &self.export_dir {
            Some(dir) => dir.join(&self.export_name),
            None => PathBuf::from(&self.export_name),
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/tf-editor/config.yaml (platform config dir)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tf-editor")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> EditorConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return EditorConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<EditorConfig>(&contents) {
            Ok(mut config) => {
                config.validate();
                log::info!(
                    "load_config: Loaded config - domain {}, canvas {}x{} @ {}",
                    config.domain_size,
                    config.width,
                    config.height,
                    config.scaling
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                EditorConfig::default()
            }
        },
        Err(e) => {
            log::warn!("load_config: Failed to read config file: {}, using defaults", e);
            EditorConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &EditorConfig, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config")?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Saved successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("nope.yaml"));
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_round_trip_through_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = EditorConfig {
            domain_size: 1024,
            focus_mode: true,
            insert_report: InsertReport::OnMutation,
            export_dir: Some(PathBuf::from("/data/tf")),
            ..EditorConfig::default()
        };
        save_config(&config, &path).unwrap();
        assert_eq!(load_config(&path), config);
    }

    #[test]
    fn test_partial_file_uses_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "domain_size: 64\ninsert_report: on_mutation\n").unwrap();

        let config = load_config(&path);
        assert_eq!(config.domain_size, 64);
        assert_eq!(config.insert_report, InsertReport::OnMutation);
        assert_eq!(config.max_handles, DEFAULT_MAX_HANDLES);
    }

    #[test]
    fn test_invalid_values_are_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "domain_size: 0\nwidth: -3.0\nmax_handles: 1\n").unwrap();

        let config = load_config(&path);
        assert_eq!(config.domain_size, DEFAULT_DOMAIN_SIZE);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.max_handles, MIN_SEEDED_HANDLES);
    }

    #[test]
    fn test_small_handle_limit_is_raised_to_fit_defaults() {
        for limit in 2..MIN_SEEDED_HANDLES {
            let mut config = EditorConfig {
                max_handles: limit,
                ..EditorConfig::default()
            };
            config.validate();
            assert_eq!(config.max_handles, MIN_SEEDED_HANDLES, "limit {}", limit);
        }

        let mut config = EditorConfig {
            max_handles: 9,
            ..EditorConfig::default()
        };
        config.validate();
        assert_eq!(config.max_handles, 9);
    }

    #[test]
    fn test_garbage_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "domain_size: [not, a, number").unwrap();
        assert_eq!(load_config(&path), EditorConfig::default());
    }

    #[test]
    fn test_export_base() {
        let mut config = EditorConfig::default();
        assert_eq!(config.export_base(), PathBuf::from("transfer_function"));
        config.export_dir = Some(PathBuf::from("/out"));
        config.export_name = String::from("skull");
        assert_eq!(config.export_base(), PathBuf::from("/out/skull"));
    }
}
