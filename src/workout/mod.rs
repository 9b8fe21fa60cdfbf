//! Workout interval timing.
//!
//! - `config`: the workout a user sets up
//! - `machine`: the phase-sequencing session machine
//! - `ticker`: the one-second tick source the machine owns
//! - `plan`: the full phase schedule of a workout
//! - `store`: best-effort persistence of the workout
//! - `time`: MM:SS formatting and duration parsing

pub mod config;
pub mod machine;
pub mod plan;
pub mod store;
pub mod ticker;
pub mod time;

pub use config::{Exercise, Setting, WorkoutConfig};
pub use machine::{advance, IntervalSession, Phase, SessionState, Transition};
pub use plan::{schedule, Plan, PlanEntry, MAX_PLAN_ENTRIES};
pub use store::{ConfigStore, FileStore, MemoryStore};
pub use ticker::{Ticker, TICK_PERIOD};
pub use time::{format_duration, format_time, parse_duration, render_progress_bar};
