//! intervals - A workout interval timer for the terminal
//!
//! This crate provides the interval session machine (work, rest and
//! round-reset phases over a list of exercises) plus the command-line and
//! terminal interfaces built around it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod tui;
pub mod workout;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::IntervalsError;
pub use workout::{IntervalSession, Phase, SessionState, WorkoutConfig};
