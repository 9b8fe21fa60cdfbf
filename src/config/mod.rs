//! Configuration management for intervals.
//!
//! This module handles loading and saving settings from `~/.intervals/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{AlertConfig, ColorSetting, Config, EditorConfig, GeneralConfig};
