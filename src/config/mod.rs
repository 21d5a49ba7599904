//! Application Configuration
//!
//! Overlay appearance and demo settings stored in TOML format.

use anyhow::Result;
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::OverlayError;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overlay appearance
    pub overlay: OverlaySettings,
    /// Demo application settings
    pub demo: DemoSettings,
}

/// Overlay appearance and timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Spinner animation interval in milliseconds
    pub timer_interval_ms: u64,
    /// Diameter of the spinner arc
    pub arc_diameter: f32,
    /// Width of the spinner arc stroke
    pub arc_width: f32,
    /// Message font size
    pub font_size: f32,
    /// Backdrop color (RGBA)
    pub backdrop: [f32; 4],
    /// Spinner arc color (RGBA)
    pub spinner_color: [f32; 4],
    /// Info message color (RGBA)
    pub info_color: [f32; 4],
    /// Error message color (RGBA)
    pub error_color: [f32; 4],
    /// Icon drawn in the middle of the spinner, built-in glyph if unset
    pub icon_path: Option<PathBuf>,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            timer_interval_ms: 40,
            arc_diameter: 80.0,
            arc_width: 3.0,
            font_size: 14.0,
            backdrop: [0.106, 0.106, 0.106, 0.85],
            spinner_color: [0.259, 0.255, 0.255, 1.0],
            info_color: [0.533, 0.533, 0.533, 1.0],
            error_color: [0.784, 0.325, 0.290, 1.0],
            icon_path: None,
        }
    }
}

impl OverlaySettings {
    pub fn timer_interval(&self) -> Duration {
        Duration::from_millis(self.timer_interval_ms)
    }

    /// Check ranges that would otherwise produce a broken overlay
    pub fn validate(&self) -> std::result::Result<(), OverlayError> {
        if self.timer_interval_ms == 0 {
            return Err(invalid("timer_interval_ms", "must be greater than zero"));
        }
        if !(self.arc_diameter > 0.0) {
            return Err(invalid("arc_diameter", "must be greater than zero"));
        }
        if !(self.arc_width > 0.0) {
            return Err(invalid("arc_width", "must be greater than zero"));
        }
        if !(self.font_size > 0.0) {
            return Err(invalid("font_size", "must be greater than zero"));
        }
        for (field, color) in [
            ("backdrop", &self.backdrop),
            ("spinner_color", &self.spinner_color),
            ("info_color", &self.info_color),
            ("error_color", &self.error_color),
        ] {
            if color.iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(invalid(field, "channels must be within 0.0..=1.0"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> OverlayError {
    OverlayError::InvalidSetting {
        field,
        reason: reason.to_string(),
    }
}

/// Convert an RGBA float color to egui's
pub fn to_color32(rgba: [f32; 4]) -> Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(
        channel(rgba[0]),
        channel(rgba[1]),
        channel(rgba[2]),
        channel(rgba[3]),
    )
}

/// Demo window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Duration of the simulated load in milliseconds
    pub load_duration_ms: u64,
    /// Number of rows shown by the fake list view
    pub rows: usize,
    /// Debug logging
    pub debug_logging: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            load_duration_ms: 2000,
            rows: 40,
            debug_logging: false,
        }
    }
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "loadingoverlay", "LoadingOverlay")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}

/// Default location of `config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    config.overlay.validate()?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
