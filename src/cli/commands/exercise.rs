//! Exercise list commands.

use colored::Colorize;

use super::Context;
use crate::cli::args::{ExerciseCommands, OutputFormat};
use crate::error::IntervalsError;
use crate::output::{format_exercises, to_json};

/// Execute exercise subcommands.
///
/// # Errors
///
/// Returns an error if the exercise does not exist or the workout cannot be
/// saved.
pub fn exercise(ctx: &Context, cmd: ExerciseCommands) -> Result<String, IntervalsError> {
    let mut workout = ctx.workout();

    match cmd {
        ExerciseCommands::List => format_exercises(&workout, ctx.format),

        ExerciseCommands::Add { name } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(IntervalsError::InvalidInput(
                    "Exercise name cannot be empty".to_string(),
                ));
            }
            let added = workout.add_exercise(name).clone();
            ctx.save_workout(&workout)?;
            match ctx.format {
                OutputFormat::Json => to_json(&added),
                OutputFormat::Pretty => Ok(format!(
                    "{} Added {} ({} exercises)",
                    "✓".green(),
                    added.name.bold(),
                    workout.exercise_count()
                )),
            }
        }

        ExerciseCommands::Rename { which, name } => {
            workout.rename_exercise(&which, name.trim())?;
            ctx.save_workout(&workout)?;
            match ctx.format {
                OutputFormat::Json => to_json(&workout.exercises),
                OutputFormat::Pretty => Ok(format!("{} Renamed to {}", "✓".green(), name.bold())),
            }
        }

        ExerciseCommands::Remove { which } => {
            let removed = workout.remove_exercise(&which)?;
            ctx.save_workout(&workout)?;
            match ctx.format {
                OutputFormat::Json => to_json(&removed),
                OutputFormat::Pretty => {
                    let mut output = format!("{} Removed {}", "✓".green(), removed.name.bold());
                    if workout.exercises.is_empty() {
                        output.push_str(
                            &"\n   No exercises left: each round is a single work phase."
                                .dimmed()
                                .to_string(),
                        );
                    }
                    Ok(output)
                }
            }
        }
    }
}
