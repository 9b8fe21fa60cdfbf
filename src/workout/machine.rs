//! Interval session state machine.
//!
//! The countdown is split in two:
//! - [`advance`] is a pure transition over one elapsed second
//! - [`IntervalSession`] owns the state and the single tick source, and
//!   feeds due ticks through `advance`
//!
//! Phases run `work, (rest, work)×(n−1), reset` per round, then `finished`.
//! A phase never shows 0: the tick that would take `time_left` below 1
//! jumps straight to the next phase's duration.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::WorkoutConfig;
use super::ticker::Ticker;

/// Phase of an interval session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Not started yet
    Idle,
    /// Working on an exercise
    Work,
    /// Resting between exercises
    Rest,
    /// Pause between rounds
    Reset,
    /// All rounds done
    Finished,
}

impl Phase {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::Work => "Work",
            Self::Rest => "Rest",
            Self::Reset => "Round Reset",
            Self::Finished => "Finished",
        }
    }

    /// Whether the countdown is in an active phase.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Work | Self::Rest | Self::Reset)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Whether a countdown is active.
    pub is_running: bool,
    /// Current phase.
    pub phase: Phase,
    /// Seconds left in the current phase.
    pub time_left: u32,
    /// Zero-based exercise index.
    pub exercise_index: usize,
    /// One-based round counter.
    pub round: u32,
}

impl SessionState {
    /// State before any session has started.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            is_running: false,
            phase: Phase::Idle,
            time_left: 0,
            exercise_index: 0,
            round: 1,
        }
    }

    /// State at the first second of a fresh session.
    #[must_use]
    pub const fn started(config: &WorkoutConfig) -> Self {
        Self {
            is_running: true,
            phase: Phase::Work,
            time_left: config.work_time,
            exercise_index: 0,
            round: 1,
        }
    }

    const fn enter(self, phase: Phase, time_left: u32) -> Self {
        Self {
            phase,
            time_left,
            ..self
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Apply one elapsed second to `state`, reading durations from `config`.
///
/// Idle and finished states are returned unchanged.
#[must_use]
pub fn advance(state: &SessionState, config: &WorkoutConfig) -> SessionState {
    let state = *state;
    if !state.is_running || !state.phase.is_active() {
        return state;
    }

    if state.time_left > 1 {
        return SessionState {
            time_left: state.time_left - 1,
            ..state
        };
    }

    // An empty list behaves as a single exercise that is already last.
    let last_index = config.exercises.len().saturating_sub(1);

    match state.phase {
        Phase::Work => {
            if state.exercise_index < last_index {
                state.enter(Phase::Rest, config.rest_time)
            } else {
                state.enter(Phase::Reset, config.round_reset)
            }
        }
        Phase::Rest => SessionState {
            exercise_index: (state.exercise_index + 1).min(last_index),
            ..state.enter(Phase::Work, config.work_time)
        },
        Phase::Reset => {
            if state.round < config.rounds {
                SessionState {
                    round: state.round + 1,
                    exercise_index: 0,
                    ..state.enter(Phase::Work, config.work_time)
                }
            } else {
                SessionState {
                    is_running: false,
                    ..state.enter(Phase::Finished, 0)
                }
            }
        }
        Phase::Idle | Phase::Finished => state,
    }
}

/// A phase change produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    /// Phase that just ended.
    pub from: Phase,
    /// Phase that just began.
    pub to: Phase,
    /// Round after the transition.
    pub round: u32,
    /// Exercise index after the transition.
    pub exercise_index: usize,
    /// Duration of the new phase.
    pub time_left: u32,
}

/// The interval session machine.
///
/// Owns the session state and its tick source. Hosts call [`start`] once per
/// user "begin" action and [`poll`] whenever they get a chance; everything
/// else is read-only.
///
/// [`start`]: IntervalSession::start
/// [`poll`]: IntervalSession::poll
#[derive(Debug, Clone, Default)]
pub struct IntervalSession {
    state: SessionState,
    ticker: Ticker,
}

impl IntervalSession {
    /// Create an idle session with a one-second tick.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an idle session with a custom tick period.
    #[must_use]
    pub fn with_period(period: Duration) -> Self {
        Self {
            state: SessionState::idle(),
            ticker: Ticker::new(period),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether a countdown is active.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Seconds left in the current phase.
    #[must_use]
    pub const fn time_left(&self) -> u32 {
        self.state.time_left
    }

    /// One-based round counter.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.state.round
    }

    /// Zero-based exercise index.
    #[must_use]
    pub const fn exercise_index(&self) -> usize {
        self.state.exercise_index
    }

    /// Whether the tick source is armed.
    #[must_use]
    pub const fn is_ticking(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Instant of the next tick, if any.
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.ticker.next_deadline()
    }

    /// Start (or restart) the session from the first exercise of round one.
    pub fn start(&mut self, config: &WorkoutConfig, now: Instant) {
        self.ticker.release();
        self.state = SessionState::started(config);
        self.ticker.arm(now);
        info!(
            work = config.work_time,
            rest = config.rest_time,
            reset = config.round_reset,
            rounds = config.rounds,
            exercises = config.exercises.len(),
            "session started"
        );
    }

    /// Abort the session and return to idle.
    pub fn cancel(&mut self) {
        self.ticker.release();
        if self.state.is_running {
            info!(phase = %self.state.phase, round = self.state.round, "session cancelled");
        }
        self.state = SessionState::idle();
    }

    /// Apply a single elapsed second.
    ///
    /// Returns the transition if the phase changed. Releases the tick source
    /// once the session stops running.
    pub fn tick(&mut self, config: &WorkoutConfig) -> Option<Transition> {
        let before = self.state;
        self.state = advance(&before, config);

        if !self.state.is_running {
            self.ticker.release();
        }

        if before.phase == self.state.phase {
            return None;
        }

        debug!(
            from = %before.phase,
            to = %self.state.phase,
            round = self.state.round,
            exercise = self.state.exercise_index,
            time_left = self.state.time_left,
            "phase transition"
        );
        if self.state.phase == Phase::Finished {
            info!(rounds = before.round, "session finished");
        }

        Some(Transition {
            from: before.phase,
            to: self.state.phase,
            round: self.state.round,
            exercise_index: self.state.exercise_index,
            time_left: self.state.time_left,
        })
    }

    /// Apply every tick that fell due up to `now`.
    ///
    /// Stops early if the session finishes part way through.
    pub fn poll(&mut self, config: &WorkoutConfig, now: Instant) -> Vec<Transition> {
        let due = self.ticker.due(now);
        let mut transitions = Vec::new();
        for _ in 0..due {
            if !self.state.is_running {
                break;
            }
            if let Some(t) = self.tick(config) {
                transitions.push(t);
            }
        }
        transitions
    }
}
