use colored::{ColoredString, Colorize};

use crate::workout::{format_duration, format_time, Phase, Plan, WorkoutConfig};

/// Largest span `chrono::Duration` holds in whole seconds.
const MAX_DURATION_SECONDS: i64 = i64::MAX / 1000;

/// Colour a label in its phase colour.
#[must_use]
pub fn paint_phase(phase: Phase, text: &str) -> ColoredString {
    match phase {
        Phase::Idle => text.magenta(),
        Phase::Work => text.green(),
        Phase::Rest => text.red(),
        Phase::Reset => text.yellow(),
        Phase::Finished => text.dimmed(),
    }
}

/// Format the workout settings as a pretty card list
pub fn format_workout_pretty(config: &WorkoutConfig) -> String {
    let mut output = format!("{}\n", "Interval Timer".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    let rows = [
        ("Work", format_time(u64::from(config.work_time))),
        ("Rest", format_time(u64::from(config.rest_time))),
        ("Exercises", config.exercise_count().to_string()),
        ("Rounds", format!("{}x", config.rounds)),
        ("Round Reset", format_time(u64::from(config.round_reset))),
    ];
    for (label, value) in rows {
        output.push_str(&format!("{label:<14}{}\n", value.bold()));
    }

    output.push_str(&"─".repeat(40));
    output.push('\n');
    let total = config.total_seconds();
    output.push_str(&format!(
        "{:<14}{} ({})",
        "Total",
        format_time(total).cyan().bold(),
        format_duration(chrono::Duration::seconds(
            i64::try_from(total).unwrap_or(i64::MAX).min(MAX_DURATION_SECONDS)
        ))
    ));

    output
}

/// Format the exercise list as pretty output
pub fn format_exercises_pretty(config: &WorkoutConfig) -> String {
    if config.exercises.is_empty() {
        return "Exercises (0 items)\n  No exercises".to_string();
    }

    let mut output = format!("Exercises ({} items)\n", config.exercise_count());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for (i, exercise) in config.exercises.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. {}  {}\n",
            i + 1,
            exercise.name.bold(),
            exercise.id.dimmed()
        ));
    }

    output
}

/// Format a phase schedule as a pretty table
pub fn format_plan_pretty(plan: &Plan) -> String {
    let mut output = format!("{}\n", "Workout Plan".bold());
    output.push_str(&"═".repeat(48));
    output.push('\n');
    output.push_str(&format!(
        "{:<7} {:<13} {:<7} {}\n",
        "Start", "Phase", "Length", "Exercise"
    ));
    output.push_str(&"─".repeat(48));
    output.push('\n');

    for entry in &plan.entries {
        let label = format!("{:<13}", entry.phase.display_name());
        let exercise = match entry.phase {
            Phase::Work => entry
                .exercise
                .clone()
                .unwrap_or_else(|| format!("#{}", entry.exercise_index + 1)),
            Phase::Reset => format!("end of round {}", entry.round),
            _ => String::new(),
        };
        output.push_str(&format!(
            "{:<7} {} {:<7} {}\n",
            format_time(entry.starts_at),
            paint_phase(entry.phase, &label),
            format_time(entry.duration),
            exercise
        ));
    }

    if plan.truncated {
        output.push_str(&format!(
            "{}\n",
            format!("… first {} of {} phases shown", plan.entries.len(), plan.phases).dimmed()
        ));
    }

    output.push_str(&"─".repeat(48));
    output.push('\n');
    output.push_str(&format!(
        "{} phases, total {}",
        plan.phases,
        format_time(plan.total_seconds).bold()
    ));
    if plan.ticks != plan.total_seconds {
        output.push_str(&format!(
            " ({} with zero-length phases)",
            format_time(plan.ticks)
        ));
    }

    output
}
