//! Command-line interface for intervals.

pub mod args;
pub mod commands;
