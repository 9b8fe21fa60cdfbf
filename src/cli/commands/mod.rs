//! Command implementations for intervals.
//!
//! This module contains the implementation of all CLI commands.

mod completions;
mod config;
mod exercise;
mod run;

pub use completions::{completion_install_instructions, completions, generate_completions, shell_from_str};
pub use config::config;
pub use exercise::exercise;
pub use run::{run, RunEvent};

use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};
use crate::error::IntervalsError;
use crate::output::format_plan;
use crate::workout::{schedule, ConfigStore, FileStore, WorkoutConfig};

/// Everything a command needs: resolved paths, settings, the workout store
/// and the output format.
#[derive(Debug, Clone)]
pub struct Context {
    /// Data paths.
    pub paths: Paths,
    /// Application settings.
    pub settings: Config,
    /// Workout persistence.
    pub store: FileStore,
    /// Output format for results.
    pub format: OutputFormat,
}

impl Context {
    /// Build a context rooted at `paths`.
    ///
    /// `format` overrides the configured default output.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be parsed.
    pub fn load(paths: Paths, format: Option<OutputFormat>) -> Result<Self, IntervalsError> {
        let settings = Config::load_from_path(&paths.config_file)?;
        let format = format.unwrap_or(settings.general.default_output);
        let store = FileStore::new(&paths.workout_file);
        Ok(Self {
            paths,
            settings,
            store,
            format,
        })
    }

    /// The saved workout, or the default one.
    #[must_use]
    pub fn workout(&self) -> WorkoutConfig {
        self.store.load_or_default()
    }

    /// Persist an edited workout.
    ///
    /// # Errors
    ///
    /// Returns an error if the workout file cannot be written.
    pub fn save_workout(&self, config: &WorkoutConfig) -> Result<(), IntervalsError> {
        self.paths.ensure_dirs()?;
        self.store.write(config)
    }
}

/// Execute plan command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn plan(ctx: &Context) -> Result<String, IntervalsError> {
    format_plan(&schedule(&ctx.workout()), ctx.format)
}
