//! Workout settings commands.

use colored::Colorize;
use serde_json::json;

use super::Context;
use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::error::IntervalsError;
use crate::output::{format_workout, to_json};
use crate::workout::{format_time, parse_duration, Setting, WorkoutConfig};

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the value is invalid or the workout cannot be saved.
pub fn config(ctx: &Context, cmd: ConfigCommands) -> Result<String, IntervalsError> {
    match cmd {
        ConfigCommands::Show => format_workout(&ctx.workout(), ctx.format),

        ConfigCommands::Path => Ok(ctx.store.path().display().to_string()),

        ConfigCommands::Set { setting, value } => {
            let mut workout = ctx.workout();
            let parsed = parse_setting_value(setting, &value)?;
            workout.set(setting, parsed)?;
            ctx.save_workout(&workout)?;
            changed(ctx, &workout, setting)
        }

        ConfigCommands::Adjust { setting, direction } => {
            let mut workout = ctx.workout();
            let step = if setting.is_duration() {
                i64::from(ctx.settings.editor.step_seconds)
            } else {
                1
            };
            workout.adjust(setting, step * direction.sign());
            ctx.save_workout(&workout)?;
            changed(ctx, &workout, setting)
        }

        ConfigCommands::Reset => {
            let workout = WorkoutConfig::default();
            ctx.save_workout(&workout)?;
            match ctx.format {
                OutputFormat::Json => to_json(&workout),
                OutputFormat::Pretty => Ok(format!(
                    "{}\n\n{}",
                    "Workout reset to defaults.".green(),
                    format_workout(&workout, OutputFormat::Pretty)?
                )),
            }
        }

        ConfigCommands::Init { force } => init_settings(ctx, force),
    }
}

/// Write default application settings to the settings file.
fn init_settings(ctx: &Context, force: bool) -> Result<String, IntervalsError> {
    let path = &ctx.paths.config_file;
    if path.exists() && !force {
        return Err(IntervalsError::InvalidInput(format!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        )));
    }

    ctx.paths.ensure_dirs()?;
    Config::default().save_to_path(path)?;

    match ctx.format {
        OutputFormat::Json => to_json(&json!({ "path": path })),
        OutputFormat::Pretty => Ok(format!(
            "{} Wrote settings to {}",
            "✓".green(),
            path.display().to_string().bold()
        )),
    }
}

/// Parse a value for `setting`: a duration for times, a count for rounds.
fn parse_setting_value(setting: Setting, value: &str) -> Result<u32, IntervalsError> {
    if setting.is_duration() {
        parse_duration(value)
            .ok_or_else(|| IntervalsError::InvalidInput(format!("Invalid duration: {value}")))
    } else {
        value
            .trim()
            .parse::<u32>()
            .map_err(|_| IntervalsError::InvalidInput(format!("Invalid round count: {value}")))
    }
}

fn describe(workout: &WorkoutConfig, setting: Setting) -> String {
    let value = workout.get(setting);
    if setting.is_duration() {
        format_time(u64::from(value))
    } else {
        format!("{value}x")
    }
}

fn changed(
    ctx: &Context,
    workout: &WorkoutConfig,
    setting: Setting,
) -> Result<String, IntervalsError> {
    match ctx.format {
        OutputFormat::Json => to_json(workout),
        OutputFormat::Pretty => Ok(format!(
            "{} {} → {}\n   Total: {}",
            "✓".green(),
            setting.display_name(),
            describe(workout, setting).bold(),
            format_time(workout.total_seconds())
        )),
    }
}
