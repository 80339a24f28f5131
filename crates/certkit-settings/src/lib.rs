//! CertKit Settings Crate
//!
//! Handles editor configuration: history depth, snapping, keyboard nudge
//! steps, clipboard paste offset and the default canvas preset, persisted
//! as JSON or TOML in the platform config directory.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, CanvasSettings, ClipboardSettings, EditorConfig, HistorySettings,
    NudgeSettings, SnapSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
