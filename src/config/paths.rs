//! Path resolution for intervals configuration and data files.
//!
//! All intervals data is stored in `~/.intervals/`:
//! - `config.yaml` - Application settings
//! - `workout.json` - The saved workout
//! - `intervals.log` - Log output while the TUI owns the terminal

use std::path::PathBuf;

use crate::error::IntervalsError;

/// Paths to intervals configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.intervals/`
    pub root: PathBuf,
    /// Settings file: `~/.intervals/config.yaml`
    pub config_file: PathBuf,
    /// Workout file: `~/.intervals/workout.json`
    pub workout_file: PathBuf,
    /// Log file: `~/.intervals/intervals.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, IntervalsError> {
        let home = std::env::var("HOME").map_err(|_| {
            IntervalsError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".intervals")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            workout_file: root.join("workout.json"),
            log_file: root.join("intervals.log"),
            root,
        }
    }

    /// Resolve paths from an optional override, falling back to the home
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory
    /// cannot be determined.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, IntervalsError> {
        root.map_or_else(Self::new, |root| Ok(Self::with_root(root)))
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), IntervalsError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                IntervalsError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".intervals"))
        })
    }
}
