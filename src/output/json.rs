//! JSON output formatting for intervals.

use serde::Serialize;
use serde_json::json;

use crate::error::IntervalsError;
use crate::workout::{format_time, Plan, WorkoutConfig};

/// Format the workout as JSON
///
/// # Errors
///
/// Returns `IntervalsError::Parse` if JSON serialization fails.
pub fn format_workout_json(config: &WorkoutConfig) -> Result<String, IntervalsError> {
    let total = config.total_seconds();
    let output = json!({
        "workout": config,
        "totalSeconds": total,
        "total": format_time(total),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the exercise list as JSON
///
/// # Errors
///
/// Returns `IntervalsError::Parse` if JSON serialization fails.
pub fn format_exercises_json(config: &WorkoutConfig) -> Result<String, IntervalsError> {
    let output = json!({
        "count": config.exercise_count(),
        "items": config.exercises
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a phase schedule as JSON
///
/// # Errors
///
/// Returns `IntervalsError::Parse` if JSON serialization fails.
pub fn format_plan_json(plan: &Plan) -> Result<String, IntervalsError> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `IntervalsError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, IntervalsError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Single-line JSON, for event streams
///
/// # Errors
///
/// Returns `IntervalsError::Parse` if JSON serialization fails.
pub fn to_json_line<T: Serialize>(value: &T) -> Result<String, IntervalsError> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::schedule;

    #[test]
    fn test_format_workout_json() {
        let output = format_workout_json(&WorkoutConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["totalSeconds"], 180);
        assert_eq!(value["total"], "03:00");
        assert_eq!(value["workout"]["workTime"], 30);
    }

    #[test]
    fn test_format_plan_json() {
        let output = format_plan_json(&schedule(&WorkoutConfig::default())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["entries"][0]["phase"], "work");
        assert_eq!(value["entries"][1]["phase"], "reset");
        assert_eq!(value["ticks"], 180);
        assert_eq!(value["phases"], 6);
        assert_eq!(value["truncated"], false);
    }

    #[test]
    fn test_to_json_line_is_single_line() {
        let line = to_json_line(&json!({"a": 1, "b": [1, 2]})).unwrap();
        assert!(!line.contains('\n'));
    }
}
