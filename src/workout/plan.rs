//! Phase schedule for a workout.
//!
//! The schedule is produced by fast-forwarding a fresh session through
//! [`advance`], so it always agrees with what a live run does.

use serde::Serialize;

use super::config::WorkoutConfig;
use super::machine::{advance, Phase, SessionState};

/// One phase of a planned session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    /// Phase kind.
    pub phase: Phase,
    /// One-based round.
    pub round: u32,
    /// Zero-based exercise index.
    pub exercise_index: usize,
    /// Exercise name, for work phases with a named exercise.
    pub exercise: Option<String>,
    /// Tick offset at which the phase begins.
    pub starts_at: u64,
    /// Ticks spent in the phase.
    pub duration: u64,
}

/// Most entries a plan lists; longer workouts are cut short.
pub const MAX_PLAN_ENTRIES: usize = 10_000;

/// A planned session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Phases in order, excluding the final `finished` state. At most
    /// [`MAX_PLAN_ENTRIES`].
    pub entries: Vec<PlanEntry>,
    /// Phases a live run passes through, listed or not.
    pub phases: u64,
    /// Whether `entries` stops before the end of the workout.
    pub truncated: bool,
    /// Ticks a live run consumes before finishing.
    pub ticks: u64,
    /// Configured total (see [`WorkoutConfig::total_seconds`]).
    pub total_seconds: u64,
}

/// Build the phase schedule for `config`.
#[must_use]
pub fn schedule(config: &WorkoutConfig) -> Plan {
    let mut entries = Vec::new();
    let mut state = SessionState::started(config);
    let mut offset: u64 = 0;

    while state.is_running && entries.len() < MAX_PLAN_ENTRIES {
        // A phase lasts its duration, or one tick if configured as zero.
        let ticks = u64::from(state.time_left.max(1));
        entries.push(PlanEntry {
            phase: state.phase,
            round: state.round,
            exercise_index: state.exercise_index,
            exercise: (state.phase == Phase::Work)
                .then(|| config.exercise_name(state.exercise_index).map(str::to_string))
                .flatten(),
            starts_at: offset,
            duration: ticks,
        });
        offset += ticks;

        // Jump to the boundary tick of this phase.
        state = advance(
            &SessionState {
                time_left: 1,
                ..state
            },
            config,
        );
    }

    Plan {
        entries,
        phases: phase_count(config),
        truncated: state.is_running,
        ticks: run_ticks(config),
        total_seconds: config.total_seconds(),
    }
}

/// Exercises a round cycles through; an empty list still works once.
fn slots(config: &WorkoutConfig) -> u64 {
    u64::try_from(config.exercise_count().max(1)).unwrap_or(u64::MAX)
}

/// Phases in a full run: a work and a rest or reset per slot, every round.
fn phase_count(config: &WorkoutConfig) -> u64 {
    slots(config)
        .saturating_mul(2)
        .saturating_mul(u64::from(config.rounds.max(1)))
}

/// Ticks in a full run, with zero-length phases costing one tick each.
fn run_ticks(config: &WorkoutConfig) -> u64 {
    let n = slots(config);
    let per_round = u64::from(config.work_time.max(1))
        .saturating_mul(n)
        .saturating_add(u64::from(config.rest_time.max(1)).saturating_mul(n - 1))
        .saturating_add(u64::from(config.round_reset.max(1)));
    per_round.saturating_mul(u64::from(config.rounds.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::config::Exercise;

    #[test]
    fn test_schedule_scenario() {
        let config = WorkoutConfig {
            work_time: 5,
            rest_time: 5,
            round_reset: 5,
            rounds: 2,
            exercises: vec![Exercise::new("Squats"), Exercise::new("Lunges")],
        };

        let plan = schedule(&config);
        let phases: Vec<(Phase, u32, usize)> = plan
            .entries
            .iter()
            .map(|e| (e.phase, e.round, e.exercise_index))
            .collect();

        assert_eq!(
            phases,
            vec![
                (Phase::Work, 1, 0),
                (Phase::Rest, 1, 0),
                (Phase::Work, 1, 1),
                (Phase::Reset, 1, 1),
                (Phase::Work, 2, 0),
                (Phase::Rest, 2, 0),
                (Phase::Work, 2, 1),
                (Phase::Reset, 2, 1),
            ]
        );
        assert_eq!(plan.ticks, 40);
        assert_eq!(plan.total_seconds, 40);
        assert_eq!(plan.entries[2].exercise.as_deref(), Some("Lunges"));
        assert_eq!(plan.entries[1].exercise, None);
        assert_eq!(plan.entries[7].starts_at, 35);
    }

    #[test]
    fn test_schedule_default() {
        let plan = schedule(&WorkoutConfig::default());
        assert_eq!(plan.entries.len(), 6);
        assert_eq!(plan.ticks, 180);
        assert_eq!(plan.total_seconds, 180);
    }

    #[test]
    fn test_schedule_zero_durations_take_one_tick() {
        let config = WorkoutConfig {
            work_time: 0,
            rest_time: 0,
            round_reset: 0,
            rounds: 1,
            exercises: vec![Exercise::new("A")],
        };
        let plan = schedule(&config);
        assert_eq!(plan.entries.len(), 2);
        assert_eq!(plan.ticks, 2);
        assert_eq!(plan.total_seconds, 0);
    }

    #[test]
    fn test_schedule_counts_match_listed_entries() {
        let config = WorkoutConfig {
            work_time: 3,
            rest_time: 0,
            round_reset: 4,
            rounds: 3,
            exercises: vec![Exercise::new("A"), Exercise::new("B"), Exercise::new("C")],
        };
        let plan = schedule(&config);
        let last = plan.entries.last().unwrap();

        assert!(!plan.truncated);
        assert_eq!(plan.phases, plan.entries.len() as u64);
        assert_eq!(plan.ticks, last.starts_at + last.duration);
    }

    #[test]
    fn test_schedule_no_exercises() {
        let config = WorkoutConfig {
            exercises: Vec::new(),
            ..WorkoutConfig::default()
        };
        let plan = schedule(&config);
        assert_eq!(plan.phases, 6);
        assert_eq!(plan.entries.len(), 6);
        assert_eq!(plan.ticks, 180);
    }

    #[test]
    fn test_schedule_huge_workout_is_capped() {
        let config = WorkoutConfig {
            work_time: u32::MAX,
            rest_time: 1,
            round_reset: u32::MAX,
            rounds: u32::MAX,
            exercises: vec![Exercise::new("A"), Exercise::new("B")],
        };
        let plan = schedule(&config);

        assert!(plan.truncated);
        assert_eq!(plan.entries.len(), MAX_PLAN_ENTRIES);
        assert_eq!(plan.phases, 4 * u64::from(u32::MAX));
        assert_eq!(plan.ticks, u64::MAX);
        assert_eq!(plan.total_seconds, u64::MAX);
    }
}
