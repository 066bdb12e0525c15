//! Application settings persistence
//!
//! Handles saving and loading the demo's preferences, including the
//! whole spinner configuration surface. Colors are stored as `#rrggbb`
//! strings; anything unparseable degrades to the stock value rather
//! than failing the load.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ui::spinner::SpinnerStyle;
use crate::ui::theme;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Spinner configuration surface
    #[serde(default)]
    pub spinner: SpinnerSettings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode on/off
    #[serde(default = "default_true")]
    pub dark_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

/// The spinner's read-once configuration, in document form
///
/// One field per recognized option, mirroring [`SpinnerStyle`]; defaults
/// match the stock style exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinnerSettings {
    #[serde(default = "default_outer_ring_color")]
    pub outer_ring_color: String,
    #[serde(default = "default_arc_color")]
    pub arc_color: String,
    #[serde(default = "default_success_color")]
    pub success_color: String,
    #[serde(default = "default_failure_color")]
    pub failure_color: String,
    #[serde(default = "default_unknown_color")]
    pub unknown_color: String,
    #[serde(default = "default_text_color_from")]
    pub text_color_from: String,
    #[serde(default = "default_text_color_to")]
    pub text_color_to: String,
    #[serde(default = "default_arc_start_angle")]
    pub arc_start_angle: f32,
    #[serde(default = "default_arc_sweep_speed")]
    pub arc_sweep_speed: f32,
    #[serde(default = "default_arc_width")]
    pub arc_width: f32,
    #[serde(default = "default_ring_width")]
    pub ring_width: f32,
    #[serde(default = "default_max_text_size")]
    pub max_text_size: f32,
    #[serde(default = "default_true")]
    pub show_progress_text: bool,
    #[serde(default = "default_arc_length")]
    pub arc_length: f32,
}

fn default_true() -> bool {
    true
}

fn default_outer_ring_color() -> String {
    "#0099cc".to_string()
}

fn default_arc_color() -> String {
    "#ffffff".to_string()
}

fn default_success_color() -> String {
    "#99cc00".to_string()
}

fn default_failure_color() -> String {
    "#ff4444".to_string()
}

fn default_unknown_color() -> String {
    "#ffbb33".to_string()
}

fn default_text_color_from() -> String {
    "#000000".to_string()
}

fn default_text_color_to() -> String {
    "#ffffff".to_string()
}

fn default_arc_start_angle() -> f32 {
    270.0
}

fn default_arc_sweep_speed() -> f32 {
    20.0
}

fn default_arc_width() -> f32 {
    6.0
}

fn default_ring_width() -> f32 {
    2.0
}

fn default_max_text_size() -> f32 {
    40.0
}

fn default_arc_length() -> f32 {
    90.0
}

impl Default for SpinnerSettings {
    fn default() -> Self {
        Self {
            outer_ring_color: default_outer_ring_color(),
            arc_color: default_arc_color(),
            success_color: default_success_color(),
            failure_color: default_failure_color(),
            unknown_color: default_unknown_color(),
            text_color_from: default_text_color_from(),
            text_color_to: default_text_color_to(),
            arc_start_angle: default_arc_start_angle(),
            arc_sweep_speed: default_arc_sweep_speed(),
            arc_width: default_arc_width(),
            ring_width: default_ring_width(),
            max_text_size: default_max_text_size(),
            show_progress_text: true,
            arc_length: default_arc_length(),
        }
    }
}

impl SpinnerSettings {
    /// Resolve the document into a [`SpinnerStyle`]
    ///
    /// Colors that fail to parse keep the stock style's value.
    pub fn to_style(&self) -> SpinnerStyle {
        let stock = SpinnerStyle::default();
        let color = |hex: &str, stock| theme::parse_hex_color(hex).unwrap_or(stock);

        SpinnerStyle {
            outer_ring_color: color(&self.outer_ring_color, stock.outer_ring_color),
            arc_color: color(&self.arc_color, stock.arc_color),
            success_color: color(&self.success_color, stock.success_color),
            failure_color: color(&self.failure_color, stock.failure_color),
            unknown_color: color(&self.unknown_color, stock.unknown_color),
            text_color_from: color(&self.text_color_from, stock.text_color_from),
            text_color_to: color(&self.text_color_to, stock.text_color_to),
            arc_start_angle: self.arc_start_angle,
            arc_sweep_speed: self.arc_sweep_speed,
            arc_width: self.arc_width,
            ring_width: self.ring_width,
            max_text_size: self.max_text_size,
            show_progress_text: self.show_progress_text,
            arc_length: self.arc_length,
        }
    }
}

impl Settings {
    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "could not determine settings path".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }
        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Default settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "dash-spinner", "DashSpinner")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }
}

/// Settings persistence errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}
