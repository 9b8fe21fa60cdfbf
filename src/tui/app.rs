//! Application state for the TUI.

use std::time::Instant;

use tracing::debug;

use crate::config::AlertConfig;
use crate::workout::{ConfigStore, IntervalSession, Phase, Setting, Transition, WorkoutConfig};

/// A settings card on the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    /// Work duration.
    Work,
    /// Rest duration.
    Rest,
    /// Exercise count.
    Exercises,
    /// Round count.
    Rounds,
    /// Round reset duration.
    Reset,
}

impl Card {
    /// Cards in screen order.
    pub const ALL: [Self; 5] = [
        Self::Work,
        Self::Rest,
        Self::Exercises,
        Self::Rounds,
        Self::Reset,
    ];

    /// Card label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Rest => "Rest",
            Self::Exercises => "Exercises",
            Self::Rounds => "Rounds",
            Self::Reset => "Round Reset",
        }
    }

    /// Dialog title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Work => "Work Time",
            Self::Rest => "Rest Time",
            Self::Exercises => "Exercises",
            Self::Rounds => "Rounds",
            Self::Reset => "Round Reset",
        }
    }

    /// The workout setting behind this card, if it is a plain number.
    #[must_use]
    pub const fn setting(self) -> Option<Setting> {
        match self {
            Self::Work => Some(Setting::Work),
            Self::Rest => Some(Setting::Rest),
            Self::Rounds => Some(Setting::Rounds),
            Self::Reset => Some(Setting::Reset),
            Self::Exercises => None,
        }
    }
}

/// Application state.
pub struct App<'a> {
    /// Where workout edits are saved.
    store: &'a dyn ConfigStore,
    /// Current workout, replaced on every edit.
    pub workout: WorkoutConfig,
    /// The interval session.
    pub session: IntervalSession,
    /// Selected card index.
    pub selected: usize,
    /// Open adjust dialog.
    pub modal: Option<Card>,
    /// Status message to display.
    pub status: Option<String>,
    /// Seconds per duration adjustment.
    pub step_seconds: u32,
    alerts: AlertConfig,
}

impl<'a> App<'a> {
    /// Create a new app, loading the saved workout.
    pub fn new(store: &'a dyn ConfigStore, alerts: AlertConfig, step_seconds: u32) -> Self {
        let workout = store.load().unwrap_or_default();

        Self {
            store,
            workout,
            session: IntervalSession::new(),
            selected: 0,
            modal: None,
            status: Some("Press ? for help".to_string()),
            step_seconds: step_seconds.max(1),
            alerts,
        }
    }

    /// Seconds shown on the big clock: the phase countdown while running,
    /// otherwise the whole workout.
    #[must_use]
    pub fn display_seconds(&self) -> u64 {
        if self.session.is_running() {
            u64::from(self.session.time_left())
        } else {
            self.workout.total_seconds()
        }
    }

    /// Name of the current exercise, while working.
    #[must_use]
    pub fn current_exercise(&self) -> Option<&str> {
        if self.session.phase() == Phase::Work {
            self.workout.exercise_name(self.session.exercise_index())
        } else {
            None
        }
    }

    /// Fraction of the current phase already elapsed.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn phase_progress(&self) -> f64 {
        let total = match self.session.phase() {
            Phase::Work => self.workout.work_time,
            Phase::Rest => self.workout.rest_time,
            Phase::Reset => self.workout.round_reset,
            Phase::Idle => return 0.0,
            Phase::Finished => return 1.0,
        };
        if total == 0 {
            return 1.0;
        }
        let left = self.session.time_left().min(total);
        1.0 - f64::from(left) / f64::from(total)
    }

    /// Start (or restart) the workout.
    pub fn start(&mut self, now: Instant) {
        self.modal = None;
        self.session.start(&self.workout, now);
        self.status = Some("Go!".to_string());
    }

    /// Stop the workout and return to the start screen.
    pub fn stop(&mut self) {
        if self.session.is_running() {
            self.session.cancel();
            self.status = Some("Stopped".to_string());
        }
    }

    /// Advance the session to `now`.
    ///
    /// Returns how many times the bell should ring.
    pub fn on_tick(&mut self, now: Instant) -> usize {
        let transitions = self.session.poll(&self.workout, now);
        let mut bells = 0;
        for transition in &transitions {
            if self.should_ring(transition) {
                bells += 1;
            }
        }
        if let Some(last) = transitions.last() {
            self.status = Some(self.describe(last));
        }
        bells
    }

    fn should_ring(&self, transition: &Transition) -> bool {
        if transition.to == Phase::Finished {
            self.alerts.bell_on_finish
        } else {
            self.alerts.bell
        }
    }

    fn describe(&self, transition: &Transition) -> String {
        match transition.to {
            Phase::Work => self
                .workout
                .exercise_name(transition.exercise_index)
                .map_or_else(|| "Work".to_string(), |name| format!("Work: {name}")),
            Phase::Rest => "Rest".to_string(),
            Phase::Reset => format!("Round {} done", transition.round),
            Phase::Finished => "Workout complete!".to_string(),
            Phase::Idle => String::new(),
        }
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if self.selected < Card::ALL.len() - 1 {
            self.selected += 1;
        }
    }

    /// The selected card.
    #[must_use]
    pub fn selected_card(&self) -> Card {
        Card::ALL[self.selected.min(Card::ALL.len() - 1)]
    }

    /// Open the dialog for the selected card.
    pub fn open_selected(&mut self) {
        self.modal = Some(self.selected_card());
    }

    /// Close the open dialog.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Adjust the open dialog's value up (`sign > 0`) or down.
    ///
    /// Durations move by the step, rounds by one, exercises are added or
    /// removed at the end. Every change is saved.
    pub fn adjust(&mut self, sign: i64) {
        let Some(card) = self.modal else {
            return;
        };

        match card.setting() {
            Some(setting) => {
                let step = if setting.is_duration() {
                    i64::from(self.step_seconds)
                } else {
                    1
                };
                self.workout.adjust(setting, step * sign.signum());
            }
            None => {
                if sign > 0 {
                    let name = format!("Exercise {}", self.workout.exercise_count() + 1);
                    self.workout.add_exercise(name);
                } else if self.workout.exercises.len() > 1 {
                    self.workout.exercises.pop();
                }
            }
        }

        debug!(card = card.label(), "workout edited");
        self.store.save(&self.workout);
    }

    /// Value shown on a card.
    #[must_use]
    pub fn card_value(&self, card: Card) -> String {
        use crate::workout::format_time;

        match card {
            Card::Work => format_time(u64::from(self.workout.work_time)),
            Card::Rest => format_time(u64::from(self.workout.rest_time)),
            Card::Exercises => self.workout.exercise_count().to_string(),
            Card::Rounds => format!("{}x", self.workout.rounds),
            Card::Reset => format_time(u64::from(self.workout.round_reset)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::store::MockConfigStore;
    use crate::workout::{Exercise, MemoryStore};
    use std::time::Duration;

    fn workout() -> WorkoutConfig {
        WorkoutConfig {
            work_time: 3,
            rest_time: 2,
            round_reset: 2,
            rounds: 1,
            exercises: vec![Exercise::new("Squats"), Exercise::new("Plank")],
        }
    }

    #[test]
    fn test_new_loads_saved_workout() {
        let mut store = MockConfigStore::new();
        store.expect_load().times(1).return_const(Some(workout()));

        let app = App::new(&store, AlertConfig::default(), 5);
        assert_eq!(app.workout.work_time, 3);
        assert!(!app.session.is_running());
        assert_eq!(app.display_seconds(), workout().total_seconds());
    }

    #[test]
    fn test_new_falls_back_to_default() {
        let mut store = MockConfigStore::new();
        store.expect_load().return_const(None);

        let app = App::new(&store, AlertConfig::default(), 5);
        assert_eq!(app.display_seconds(), 180);
    }

    #[test]
    fn test_adjust_saves_every_edit() {
        let mut store = MockConfigStore::new();
        store.expect_load().return_const(Some(workout()));
        store
            .expect_save()
            .withf(|config: &WorkoutConfig| config.work_time == 8)
            .times(1)
            .return_const(());

        let mut app = App::new(&store, AlertConfig::default(), 5);
        app.open_selected();
        assert_eq!(app.modal, Some(Card::Work));
        app.adjust(1);
        assert_eq!(app.workout.work_time, 8);
    }

    #[test]
    fn test_adjust_without_modal_does_nothing() {
        let mut store = MockConfigStore::new();
        store.expect_load().return_const(Some(workout()));
        store.expect_save().times(0);

        let mut app = App::new(&store, AlertConfig::default(), 5);
        app.adjust(1);
        assert_eq!(app.workout, workout());
    }

    #[test]
    fn test_adjust_exercises_keeps_one() {
        let store = MemoryStore::with_config(workout());
        let mut app = App::new(&store, AlertConfig::default(), 5);
        app.selected = 2;
        app.open_selected();
        assert_eq!(app.modal, Some(Card::Exercises));

        app.adjust(1);
        assert_eq!(app.workout.exercise_count(), 3);
        assert_eq!(app.workout.exercise_name(2), Some("Exercise 3"));

        app.adjust(-1);
        app.adjust(-1);
        app.adjust(-1);
        assert_eq!(app.workout.exercise_count(), 1);
        assert_eq!(store.load().unwrap().exercise_count(), 1);
    }

    #[test]
    fn test_rounds_card_clamps_at_one() {
        let store = MemoryStore::with_config(workout());
        let mut app = App::new(&store, AlertConfig::default(), 5);
        app.selected = 3;
        app.open_selected();
        app.adjust(-1);
        assert_eq!(app.workout.rounds, 1);
        assert_eq!(app.card_value(Card::Rounds), "1x");
    }

    #[test]
    fn test_run_through_workout() {
        let store = MemoryStore::with_config(workout());
        let mut app = App::new(&store, AlertConfig::default(), 5);
        let start = Instant::now();

        app.start(start);
        assert_eq!(app.display_seconds(), 3);
        assert_eq!(app.current_exercise(), Some("Squats"));

        // work 3 → rest
        assert_eq!(app.on_tick(start + Duration::from_secs(3)), 1);
        assert_eq!(app.session.phase(), Phase::Rest);
        assert_eq!(app.status.as_deref(), Some("Rest"));
        assert_eq!(app.current_exercise(), None);

        // rest 2 → work Plank
        app.on_tick(start + Duration::from_secs(5));
        assert_eq!(app.current_exercise(), Some("Plank"));
        assert_eq!(app.status.as_deref(), Some("Work: Plank"));

        // work 3 → reset 2 → finished
        assert_eq!(app.on_tick(start + Duration::from_secs(60)), 2);
        assert_eq!(app.session.phase(), Phase::Finished);
        assert!(!app.session.is_running());
        assert_eq!(app.status.as_deref(), Some("Workout complete!"));
        assert_eq!(app.display_seconds(), workout().total_seconds());
    }

    #[test]
    fn test_edits_mid_run_apply_at_next_boundary() {
        let store = MemoryStore::with_config(workout());
        let mut app = App::new(&store, AlertConfig::default(), 5);
        let start = Instant::now();
        app.start(start);

        app.selected = 1;
        app.open_selected();
        app.adjust(1);
        assert_eq!(app.workout.rest_time, 7);

        app.on_tick(start + Duration::from_secs(3));
        assert_eq!(app.session.phase(), Phase::Rest);
        assert_eq!(app.session.time_left(), 7);
    }

    #[test]
    fn test_stop_returns_to_idle() {
        let store = MemoryStore::with_config(workout());
        let mut app = App::new(&store, AlertConfig::default(), 5);
        app.start(Instant::now());
        app.stop();
        assert_eq!(app.session.phase(), Phase::Idle);
        assert!(!app.session.is_ticking());
        assert_eq!(app.status.as_deref(), Some("Stopped"));
    }

    #[test]
    fn test_bells_respect_alert_settings() {
        let store = MemoryStore::with_config(workout());
        let alerts = AlertConfig {
            bell: false,
            bell_on_finish: true,
        };
        let mut app = App::new(&store, alerts, 5);
        let start = Instant::now();
        app.start(start);

        assert_eq!(app.on_tick(start + Duration::from_secs(60)), 1);
    }

    #[test]
    fn test_phase_progress() {
        let store = MemoryStore::with_config(workout());
        let mut app = App::new(&store, AlertConfig::default(), 5);
        assert!(app.phase_progress().abs() < f64::EPSILON);

        let start = Instant::now();
        app.start(start);
        app.on_tick(start + Duration::from_secs(1));
        assert!((app.phase_progress() - 1.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn test_selection_bounds() {
        let store = MemoryStore::new();
        let mut app = App::new(&store, AlertConfig::default(), 5);
        app.select_previous();
        assert_eq!(app.selected, 0);
        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.selected_card(), Card::Reset);
    }
}
