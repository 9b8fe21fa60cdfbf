//! Terminal User Interface (TUI) for intervals.
//!
//! Provides the interactive interval timer: a big clock, settings cards
//! with adjust dialogs, and phase-coloured screens while a workout runs.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, Card};

use std::io::{self, Write};
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::IntervalsError;
use crate::workout::ConfigStore;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(store: &dyn ConfigStore, settings: &Config) -> Result<(), IntervalsError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| IntervalsError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| IntervalsError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| IntervalsError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(store, settings.alerts.clone(), settings.editor.step_seconds);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<'_>) -> Result<(), IntervalsError> {
    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| IntervalsError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
                event::Action::Start => app.start(Instant::now()),
                event::Action::Stop => app.stop(),
            }
        }

        // Advance the countdown
        let bells = app.on_tick(Instant::now());
        if bells > 0 {
            ring_bell();
        }
    }

    app.stop();
    Ok(())
}

/// Ring the terminal bell; failures are ignored.
fn ring_bell() {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x07").ok();
    stdout.flush().ok();
}
