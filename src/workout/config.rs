//! Workout configuration.
//!
//! A `WorkoutConfig` is the host-owned input to the session machine. Hosts
//! replace it wholesale on every edit; the machine reads whatever snapshot
//! it is handed on each tick.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::IntervalsError;

/// A single exercise in the workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Exercise {
    /// Create an exercise with a fresh random id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }
}

/// Workout settings: durations in seconds, round count and exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkoutConfig {
    /// Work phase length.
    pub work_time: u32,
    /// Rest between exercises.
    pub rest_time: u32,
    /// Pause between rounds.
    pub round_reset: u32,
    /// Number of rounds, at least 1.
    pub rounds: u32,
    /// Exercises performed in order each round.
    pub exercises: Vec<Exercise>,
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            work_time: 30,
            rest_time: 30,
            round_reset: 30,
            rounds: 3,
            exercises: vec![Exercise::new("Exercise 1")],
        }
    }
}

/// An adjustable workout setting.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Setting {
    /// Work duration.
    Work,
    /// Rest duration.
    Rest,
    /// Round reset duration.
    Reset,
    /// Number of rounds.
    Rounds,
}

impl Setting {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Rest => "Rest",
            Self::Reset => "Round Reset",
            Self::Rounds => "Rounds",
        }
    }

    /// Whether this setting is a duration in seconds.
    #[must_use]
    pub const fn is_duration(&self) -> bool {
        !matches!(self, Self::Rounds)
    }
}

impl std::fmt::Display for Setting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl WorkoutConfig {
    /// Number of exercises per round.
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    /// Total session length in seconds.
    ///
    /// `(work × n + rest × max(n − 1, 0) + reset) × rounds` where `n` is the
    /// exercise count. This is the only place the formula lives. Saturates at
    /// `u64::MAX`.
    #[must_use]
    pub fn total_seconds(&self) -> u64 {
        let n = u64::try_from(self.exercise_count()).unwrap_or(u64::MAX);
        let per_round = u64::from(self.work_time)
            .saturating_mul(n)
            .saturating_add(u64::from(self.rest_time).saturating_mul(n.saturating_sub(1)))
            .saturating_add(u64::from(self.round_reset));
        per_round.saturating_mul(u64::from(self.rounds))
    }

    /// Current value of a setting.
    #[must_use]
    pub const fn get(&self, setting: Setting) -> u32 {
        match setting {
            Setting::Work => self.work_time,
            Setting::Rest => self.rest_time,
            Setting::Reset => self.round_reset,
            Setting::Rounds => self.rounds,
        }
    }

    /// Assign a setting.
    ///
    /// # Errors
    ///
    /// Returns `IntervalsError::InvalidInput` if rounds would be zero.
    pub fn set(&mut self, setting: Setting, value: u32) -> Result<(), IntervalsError> {
        match setting {
            Setting::Work => self.work_time = value,
            Setting::Rest => self.rest_time = value,
            Setting::Reset => self.round_reset = value,
            Setting::Rounds => {
                if value == 0 {
                    return Err(IntervalsError::InvalidInput(
                        "rounds must be at least 1".to_string(),
                    ));
                }
                self.rounds = value;
            }
        }
        Ok(())
    }

    /// Move a setting by `delta`, clamping durations at 0 and rounds at 1.
    pub fn adjust(&mut self, setting: Setting, delta: i64) {
        let floor = if setting.is_duration() { 0 } else { 1 };
        let next = (i64::from(self.get(setting)) + delta).clamp(floor, i64::from(u32::MAX));
        let next = u32::try_from(next).unwrap_or(u32::MAX);
        match setting {
            Setting::Work => self.work_time = next,
            Setting::Rest => self.rest_time = next,
            Setting::Reset => self.round_reset = next,
            Setting::Rounds => self.rounds = next,
        }
    }

    /// Name of the exercise at `index`, if any.
    #[must_use]
    pub fn exercise_name(&self, index: usize) -> Option<&str> {
        self.exercises.get(index).map(|e| e.name.as_str())
    }

    /// Append an exercise and return it.
    pub fn add_exercise(&mut self, name: impl Into<String>) -> &Exercise {
        self.exercises.push(Exercise::new(name));
        let last = self.exercises.len() - 1;
        &self.exercises[last]
    }

    /// Resolve a 1-based position or an exercise id to an index.
    #[must_use]
    pub fn find_exercise(&self, which: &str) -> Option<usize> {
        if let Ok(position) = which.trim().parse::<usize>() {
            return (1..=self.exercises.len())
                .contains(&position)
                .then(|| position - 1);
        }
        self.exercises.iter().position(|e| e.id == which.trim())
    }

    /// Remove an exercise by position or id.
    ///
    /// # Errors
    ///
    /// Returns `IntervalsError::NotFound` if no exercise matches.
    pub fn remove_exercise(&mut self, which: &str) -> Result<Exercise, IntervalsError> {
        let index = self
            .find_exercise(which)
            .ok_or_else(|| IntervalsError::NotFound(format!("exercise '{which}'")))?;
        Ok(self.exercises.remove(index))
    }

    /// Rename an exercise by position or id.
    ///
    /// # Errors
    ///
    /// Returns `IntervalsError::NotFound` if no exercise matches.
    pub fn rename_exercise(&mut self, which: &str, name: &str) -> Result<(), IntervalsError> {
        let index = self
            .find_exercise(which)
            .ok_or_else(|| IntervalsError::NotFound(format!("exercise '{which}'")))?;
        self.exercises[index].name = name.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(work: u32, rest: u32, reset: u32, rounds: u32, n: usize) -> WorkoutConfig {
        WorkoutConfig {
            work_time: work,
            rest_time: rest,
            round_reset: reset,
            rounds,
            exercises: (1..=n).map(|i| Exercise::new(format!("Exercise {i}"))).collect(),
        }
    }

    #[test]
    fn test_default_config() {
        let config = WorkoutConfig::default();
        assert_eq!(config.work_time, 30);
        assert_eq!(config.rest_time, 30);
        assert_eq!(config.round_reset, 30);
        assert_eq!(config.rounds, 3);
        assert_eq!(config.exercise_count(), 1);
        assert_eq!(config.exercise_name(0), Some("Exercise 1"));
    }

    #[test]
    fn test_total_seconds_default() {
        // 30×1 + 30×0 + 30 = 60 per round, three rounds
        assert_eq!(WorkoutConfig::default().total_seconds(), 180);
    }

    #[test]
    fn test_total_seconds_multiple_exercises() {
        let config = config(5, 5, 5, 2, 2);
        assert_eq!(config.total_seconds(), (5 * 2 + 5 + 5) * 2);
    }

    #[test]
    fn test_total_seconds_no_exercises() {
        let config = config(20, 10, 15, 2, 0);
        assert_eq!(config.total_seconds(), 30);
    }

    #[test]
    fn test_total_seconds_saturates() {
        let mut config = config(5, 5, 5, 1, 1);
        config.set(Setting::Work, u32::MAX).unwrap();
        config.set(Setting::Reset, u32::MAX).unwrap();
        config.set(Setting::Rounds, u32::MAX).unwrap();
        assert_eq!(config.total_seconds(), u64::MAX);

        // Large but representable totals stay exact
        let config = self::config(u32::MAX, u32::MAX, u32::MAX, 1, 2);
        assert_eq!(config.total_seconds(), u64::from(u32::MAX) * 4);
    }

    #[test]
    fn test_adjust_clamps() {
        let mut config = config(5, 5, 5, 1, 1);
        config.adjust(Setting::Work, -10);
        assert_eq!(config.work_time, 0);
        config.adjust(Setting::Rounds, -1);
        assert_eq!(config.rounds, 1);
        config.adjust(Setting::Rest, 5);
        assert_eq!(config.rest_time, 10);
        config.adjust(Setting::Rounds, 1);
        assert_eq!(config.rounds, 2);
    }

    #[test]
    fn test_set_rejects_zero_rounds() {
        let mut config = WorkoutConfig::default();
        assert!(config.set(Setting::Rounds, 0).is_err());
        assert_eq!(config.rounds, 3);
        config.set(Setting::Reset, 0).unwrap();
        assert_eq!(config.round_reset, 0);
    }

    #[test]
    fn test_exercise_management() {
        let mut config = config(30, 30, 30, 1, 1);
        let id = config.add_exercise("Burpees").id.clone();
        assert_eq!(config.exercise_count(), 2);

        assert_eq!(config.find_exercise("2"), Some(1));
        assert_eq!(config.find_exercise(&id), Some(1));
        assert_eq!(config.find_exercise("3"), None);
        assert_eq!(config.find_exercise("0"), None);

        config.rename_exercise("1", "Squats").unwrap();
        assert_eq!(config.exercise_name(0), Some("Squats"));

        let removed = config.remove_exercise(&id).unwrap();
        assert_eq!(removed.name, "Burpees");
        assert!(matches!(
            config.remove_exercise("9"),
            Err(IntervalsError::NotFound(_))
        ));
    }

    #[test]
    fn test_serde_camel_case() {
        let json = r#"{"workTime":40,"restTime":20,"roundReset":60,"rounds":4,
            "exercises":[{"id":"a","name":"Push-ups"}]}"#;
        let config: WorkoutConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.work_time, 40);
        assert_eq!(config.round_reset, 60);
        assert_eq!(config.exercises[0].name, "Push-ups");

        let out = serde_json::to_string(&config).unwrap();
        assert!(out.contains("\"workTime\":40"));
    }

    #[test]
    fn test_serde_partial_uses_defaults() {
        let config: WorkoutConfig = serde_json::from_str(r#"{"rounds":5}"#).unwrap();
        assert_eq!(config.rounds, 5);
        assert_eq!(config.work_time, 30);
        assert_eq!(config.exercise_count(), 1);
    }
}
