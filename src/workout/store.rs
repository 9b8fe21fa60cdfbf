//! Workout configuration persistence.
//!
//! Persistence is best effort: the host loads once at startup and saves on
//! every edit, and a failure on either side must never disturb a running
//! session. [`ConfigStore`] captures that contract; [`FileStore`] also
//! offers fallible `read`/`write` for commands that want to report errors.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::config::WorkoutConfig;
use crate::error::IntervalsError;

/// Load-on-init, save-on-change persistence for the workout configuration.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore {
    /// Load the saved configuration, or `None` if absent or unreadable.
    fn load(&self) -> Option<WorkoutConfig>;

    /// Save the configuration, ignoring failures.
    fn save(&self, config: &WorkoutConfig);

    /// Load the saved configuration or fall back to the default.
    fn load_or_default(&self) -> WorkoutConfig {
        self.load().unwrap_or_default()
    }
}

/// Stores the workout as pretty JSON in a single file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved configuration.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read(&self) -> Result<Option<WorkoutConfig>, IntervalsError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            IntervalsError::Config(format!(
                "Failed to read workout file {}: {e}",
                self.path.display()
            ))
        })?;

        serde_json::from_str(&contents).map(Some).map_err(|e| {
            IntervalsError::Config(format!(
                "Failed to parse workout file {}: {e}",
                self.path.display()
            ))
        })
    }

    /// Write the configuration, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, config: &WorkoutConfig) -> Result<(), IntervalsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, contents).map_err(|e| {
            IntervalsError::Config(format!(
                "Failed to write workout file {}: {e}",
                self.path.display()
            ))
        })?;
        debug!(path = %self.path.display(), "workout saved");
        Ok(())
    }
}

impl ConfigStore for FileStore {
    fn load(&self) -> Option<WorkoutConfig> {
        match self.read() {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "ignoring unreadable workout file");
                None
            }
        }
    }

    fn save(&self, config: &WorkoutConfig) {
        if let Err(e) = self.write(config) {
            warn!(error = %e, "failed to save workout");
        }
    }
}

/// In-memory store, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RefCell<Option<WorkoutConfig>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `config`.
    #[must_use]
    pub fn with_config(config: WorkoutConfig) -> Self {
        Self {
            saved: RefCell::new(Some(config)),
        }
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> Option<WorkoutConfig> {
        self.saved.borrow().clone()
    }

    fn save(&self, config: &WorkoutConfig) {
        *self.saved.borrow_mut() = Some(config.clone());
    }
}
