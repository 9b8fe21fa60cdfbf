//! Application settings for intervals.
//!
//! Settings are loaded from `~/.intervals/config.yaml`. The workout itself
//! lives in a separate file (see `workout::store`).

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::IntervalsError;

/// Main settings structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Transition alerts.
    pub alerts: AlertConfig,
    /// Workout editing.
    pub editor: EditorConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply to `colored`'s global switch.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Alert settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Ring the terminal bell on every phase transition.
    #[serde(default = "default_true")]
    pub bell: bool,
    /// Ring the terminal bell when the session finishes.
    #[serde(default = "default_true")]
    pub bell_on_finish: bool,
}

/// Workout editing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Seconds added or removed per duration adjustment.
    #[serde(default = "default_step_seconds")]
    pub step_seconds: u32,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_true() -> bool {
    true
}

const fn default_step_seconds() -> u32 {
    5
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            bell: default_true(),
            bell_on_finish: default_true(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            step_seconds: default_step_seconds(),
        }
    }
}

impl Config {
    /// Load settings from a specific path.
    ///
    /// If the file doesn't exist, returns default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, IntervalsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            IntervalsError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            IntervalsError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save settings to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), IntervalsError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| IntervalsError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            IntervalsError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
