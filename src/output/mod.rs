//! Output formatting for intervals.
//!
//! This module provides formatters for displaying workouts in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::IntervalsError;
use crate::workout::{Plan, WorkoutConfig};

pub use json::*;
pub use pretty::*;

/// Format the workout settings based on output format
///
/// # Errors
///
/// Returns `IntervalsError::Parse` if JSON serialization fails.
pub fn format_workout(config: &WorkoutConfig, format: OutputFormat) -> Result<String, IntervalsError> {
    match format {
        OutputFormat::Pretty => Ok(format_workout_pretty(config)),
        OutputFormat::Json => format_workout_json(config),
    }
}

/// Format the exercise list based on output format
///
/// # Errors
///
/// Returns `IntervalsError::Parse` if JSON serialization fails.
pub fn format_exercises(
    config: &WorkoutConfig,
    format: OutputFormat,
) -> Result<String, IntervalsError> {
    match format {
        OutputFormat::Pretty => Ok(format_exercises_pretty(config)),
        OutputFormat::Json => format_exercises_json(config),
    }
}

/// Format a phase schedule based on output format
///
/// # Errors
///
/// Returns `IntervalsError::Parse` if JSON serialization fails.
pub fn format_plan(plan: &Plan, format: OutputFormat) -> Result<String, IntervalsError> {
    match format {
        OutputFormat::Pretty => Ok(format_plan_pretty(plan)),
        OutputFormat::Json => format_plan_json(plan),
    }
}
