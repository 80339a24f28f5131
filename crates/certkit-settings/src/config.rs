//! Configuration and settings management for CertKit
//!
//! Provides configuration file handling, defaults and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - History (undo depth)
//! - Snapping (toggle, threshold at 100% zoom)
//! - Keyboard nudge steps
//! - Clipboard paste offset
//! - Canvas defaults for new templates

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Undo/redo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of snapshots kept, including the initial state
    pub limit: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { limit: 50 }
    }
}

/// Drag snapping settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Global snap toggle
    pub enabled: bool,
    /// Distance in screen pixels at 100% zoom within which a guide fires
    pub threshold_px: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold_px: 5.0,
        }
    }
}

/// Arrow-key nudge settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NudgeSettings {
    /// Canvas units per arrow press
    pub step: i32,
    /// Canvas units per arrow press with the modifier held
    pub large_step: i32,
}

impl Default for NudgeSettings {
    fn default() -> Self {
        Self {
            step: 1,
            large_step: 10,
        }
    }
}

/// Paste/duplicate settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardSettings {
    /// Offset applied to pasted and duplicated elements
    pub paste_offset: (i32, i32),
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            paste_offset: (20, 20),
        }
    }
}

/// Defaults for newly created templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Canvas size preset key
    pub default_preset: String,
    /// Background color for new templates
    pub background_color: String,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            default_preset: "a4-landscape".to_string(),
            background_color: "#ffffff".to_string(),
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub history: HistorySettings,
    pub snap: SnapSettings,
    pub nudge: NudgeSettings,
    pub clipboard: ClipboardSettings,
    pub canvas: CanvasSettings,
    /// Recently opened template ids, most recent first
    pub recent_templates: Vec<String>,
    /// Number of recent templates to track
    pub recent_templates_limit: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history: HistorySettings::default(),
            snap: SnapSettings::default(),
            nudge: NudgeSettings::default(),
            clipboard: ClipboardSettings::default(),
            canvas: CanvasSettings::default(),
            recent_templates: Vec::new(),
            recent_templates_limit: 10,
        }
    }
}

/// Location of the user config file (`<config dir>/certkit/config.toml`).
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("certkit").join("config.toml"))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(
                "No config at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved editor config to {}", path.display());

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.history.limit < 2 {
            return Err(ConfigError::out_of_range("history.limit", self.history.limit));
        }

        if !(self.snap.threshold_px.is_finite() && self.snap.threshold_px > 0.0) {
            return Err(ConfigError::out_of_range(
                "snap.threshold_px",
                self.snap.threshold_px,
            ));
        }

        if self.nudge.step <= 0 {
            return Err(ConfigError::out_of_range("nudge.step", self.nudge.step));
        }

        if self.nudge.large_step <= 0 {
            return Err(ConfigError::out_of_range(
                "nudge.large_step",
                self.nudge.large_step,
            ));
        }

        if self.canvas.default_preset.trim().is_empty() {
            return Err(ConfigError::out_of_range("canvas.default_preset", "\"\""));
        }

        Ok(())
    }

    /// Add a template to the recent list
    pub fn add_recent_template(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.recent_templates.retain(|t| t != &id);
        self.recent_templates.insert(0, id);
        self.recent_templates.truncate(self.recent_templates_limit);
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EditorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.history.limit, 50);
        assert_eq!(config.snap.threshold_px, 5.0);
        assert_eq!(config.clipboard.paste_offset, (20, 20));
        assert_eq!(config.nudge.large_step, 10);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = EditorConfig::default();
        config.history.limit = 1;
        assert!(config.validate().is_err());

        let mut config = EditorConfig::default();
        config.snap.threshold_px = 0.0;
        assert!(config.validate().is_err());

        let mut config = EditorConfig::default();
        config.nudge.step = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_recent_templates() {
        let mut config = EditorConfig {
            recent_templates_limit: 2,
            ..EditorConfig::default()
        };
        config.add_recent_template("a");
        config.add_recent_template("b");
        config.add_recent_template("a");
        config.add_recent_template("c");
        assert_eq!(config.recent_templates, vec!["c".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: EditorConfig = toml::from_str("[snap]\nenabled = false\n").unwrap();
        assert!(!config.snap.enabled);
        assert_eq!(config.snap.threshold_px, 5.0);
        assert_eq!(config.history.limit, 50);
    }
}
