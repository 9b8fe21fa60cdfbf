//! Headless workout runner.
//!
//! Drives an [`IntervalSession`] from the current thread, sleeping until
//! each tick falls due and reporting phase changes as they happen.

use std::io::{IsTerminal, Write};
use std::thread;
use std::time::{Duration, Instant};

use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use super::Context;
use crate::cli::args::{OutputFormat, RunArgs};
use crate::config::AlertConfig;
use crate::error::IntervalsError;
use crate::output::{paint_phase, to_json_line};
use crate::workout::{
    format_time, parse_duration, render_progress_bar, IntervalSession, Phase, Transition,
    WorkoutConfig,
};

/// A line of `run` output.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum RunEvent {
    /// The session began.
    Started {
        /// Local timestamp.
        at: String,
        /// Configured workout length.
        total_seconds: u64,
        /// Round count.
        rounds: u32,
        /// Exercises per round.
        exercises: usize,
    },
    /// A phase began.
    Phase {
        /// Local timestamp.
        at: String,
        /// Phase kind.
        phase: Phase,
        /// One-based round.
        round: u32,
        /// Round count.
        rounds: u32,
        /// Zero-based exercise index.
        exercise_index: usize,
        /// Exercise name for work phases.
        exercise: Option<String>,
        /// Phase length in seconds.
        duration: u32,
    },
    /// All rounds completed.
    Finished {
        /// Local timestamp.
        at: String,
        /// Wall-clock seconds the session took.
        elapsed_seconds: u64,
    },
}

/// How the runner reports progress.
#[derive(Debug, Clone, Copy)]
struct Reporter {
    format: OutputFormat,
    /// Redraw a countdown line in place.
    live: bool,
    bell_on_transition: bool,
    bell_on_finish: bool,
}

impl Reporter {
    fn new(format: OutputFormat, alerts: &AlertConfig, no_bell: bool, tty: bool) -> Self {
        let pretty = format == OutputFormat::Pretty;
        Self {
            format,
            live: pretty && tty,
            bell_on_transition: pretty && !no_bell && alerts.bell,
            bell_on_finish: pretty && !no_bell && alerts.bell_on_finish,
        }
    }

    fn emit<W: Write>(&self, out: &mut W, event: &RunEvent) -> Result<(), IntervalsError> {
        if self.live {
            // Clear the countdown line before printing a new phase
            write!(out, "\r\x1b[2K")?;
        }
        match self.format {
            OutputFormat::Json => writeln!(out, "{}", to_json_line(event)?)?,
            OutputFormat::Pretty => writeln!(out, "{}", pretty_event(event))?,
        }
        out.flush()?;
        Ok(())
    }

    fn ring<W: Write>(&self, out: &mut W, phase: Phase) -> Result<(), IntervalsError> {
        let ring = if phase == Phase::Finished {
            self.bell_on_finish
        } else {
            self.bell_on_transition
        };
        if ring {
            write!(out, "\x07")?;
            out.flush()?;
        }
        Ok(())
    }

    fn countdown<W: Write>(
        &self,
        out: &mut W,
        session: &IntervalSession,
        phase_len: u32,
    ) -> Result<(), IntervalsError> {
        if self.live && session.is_running() {
            let left = session.time_left().min(phase_len);
            let progress = if phase_len == 0 {
                1.0
            } else {
                1.0 - f64::from(left) / f64::from(phase_len)
            };
            write!(
                out,
                "\r   {} {} remaining",
                render_progress_bar(progress, 20),
                format_time(u64::from(session.time_left())).bold()
            )?;
            out.flush()?;
        }
        Ok(())
    }
}

fn pretty_event(event: &RunEvent) -> String {
    match event {
        RunEvent::Started {
            total_seconds,
            rounds,
            exercises,
            ..
        } => format!(
            "{} {} rounds × {} exercises, {} total",
            "▶".green().bold(),
            rounds,
            exercises,
            format_time(*total_seconds).bold()
        ),
        RunEvent::Phase {
            phase,
            round,
            rounds,
            exercise,
            duration,
            ..
        } => {
            let label = format!("{:<12}", phase.display_name().to_uppercase());
            let detail = exercise
                .as_deref()
                .map_or_else(String::new, |name| format!("  {name}"));
            format!(
                "[{round}/{rounds}] {} {}{}",
                paint_phase(*phase, &label).bold(),
                format_time(u64::from(*duration)),
                detail
            )
        }
        RunEvent::Finished { elapsed_seconds, .. } => format!(
            "{} Workout complete in {}",
            "✓".green().bold(),
            format_time(*elapsed_seconds)
        ),
    }
}

fn now_rfc3339() -> String {
    chrono::Local::now().to_rfc3339()
}

/// Describe the phase `entered` begins.
///
/// Built from the transition itself: one poll can pass several boundaries,
/// and the session only holds the state after the last one.
fn phase_event(config: &WorkoutConfig, entered: &Transition) -> RunEvent {
    RunEvent::Phase {
        at: now_rfc3339(),
        phase: entered.to,
        round: entered.round,
        rounds: config.rounds,
        exercise_index: entered.exercise_index,
        exercise: (entered.to == Phase::Work)
            .then(|| config.exercise_name(entered.exercise_index).map(str::to_string))
            .flatten(),
        duration: entered.time_left,
    }
}

/// The opening phase of a freshly started session.
fn first_phase(session: &IntervalSession) -> Transition {
    let state = session.state();
    Transition {
        from: Phase::Idle,
        to: state.phase,
        round: state.round,
        exercise_index: state.exercise_index,
        time_left: state.time_left,
    }
}

/// Apply per-run overrides on top of the saved workout.
fn apply_overrides(mut config: WorkoutConfig, args: &RunArgs) -> Result<WorkoutConfig, IntervalsError> {
    let duration = |value: &str| {
        parse_duration(value)
            .ok_or_else(|| IntervalsError::InvalidInput(format!("Invalid duration: {value}")))
    };

    if let Some(ref work) = args.work {
        config.work_time = duration(work)?;
    }
    if let Some(ref rest) = args.rest {
        config.rest_time = duration(rest)?;
    }
    if let Some(ref reset) = args.reset {
        config.round_reset = duration(reset)?;
    }
    if let Some(rounds) = args.rounds {
        if rounds == 0 {
            return Err(IntervalsError::InvalidInput(
                "rounds must be at least 1".to_string(),
            ));
        }
        config.rounds = rounds;
    }
    Ok(config)
}

/// Run a session to completion, writing events to `out`.
///
/// Returns the wall-clock time the session took.
fn run_session<W: Write>(
    config: &WorkoutConfig,
    period: Duration,
    reporter: Reporter,
    out: &mut W,
) -> Result<Duration, IntervalsError> {
    let mut session = IntervalSession::with_period(period);
    let started = Instant::now();
    session.start(config, started);

    reporter.emit(
        out,
        &RunEvent::Started {
            at: now_rfc3339(),
            total_seconds: config.total_seconds(),
            rounds: config.rounds,
            exercises: config.exercise_count(),
        },
    )?;
    reporter.emit(out, &phase_event(config, &first_phase(&session)))?;
    let mut phase_len = session.time_left();
    reporter.countdown(out, &session, phase_len)?;

    while session.is_running() {
        if let Some(deadline) = session.next_deadline() {
            let now = Instant::now();
            if deadline > now {
                thread::sleep(deadline - now);
            }
        }

        for transition in session.poll(config, Instant::now()) {
            debug!(from = %transition.from, to = %transition.to, "run transition");
            reporter.ring(out, transition.to)?;
            if transition.to == Phase::Finished {
                reporter.emit(
                    out,
                    &RunEvent::Finished {
                        at: now_rfc3339(),
                        elapsed_seconds: started.elapsed().as_secs(),
                    },
                )?;
            } else {
                reporter.emit(out, &phase_event(config, &transition))?;
                phase_len = transition.time_left;
            }
        }
        reporter.countdown(out, &session, phase_len)?;
    }

    Ok(started.elapsed())
}

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if an override is invalid or writing to stdout fails.
pub fn run(ctx: &Context, args: &RunArgs) -> Result<String, IntervalsError> {
    let config = apply_overrides(ctx.workout(), args)?;
    let stdout = std::io::stdout();
    let reporter = Reporter::new(
        ctx.format,
        &ctx.settings.alerts,
        args.no_bell,
        stdout.is_terminal(),
    );

    let mut out = stdout.lock();
    run_session(
        &config,
        Duration::from_millis(args.tick_millis),
        reporter,
        &mut out,
    )?;

    Ok(String::new())
}
