//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::IntervalsError;
use crate::tui::app::App;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or restart the workout.
    Start,
    /// Stop the workout.
    Stop,
}

/// Handle terminal events.
///
/// Waits at most 100 ms so the caller can keep the countdown moving.
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App<'_>) -> Result<Option<Action>, IntervalsError> {
    if event::poll(Duration::from_millis(100))
        .map_err(|e| IntervalsError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| IntervalsError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key(app, key));
            }
        }
    }

    Ok(None)
}

/// Apply a key press to the app.
pub fn handle_key(app: &mut App<'_>, key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.modal.is_some() {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => app.close_modal(),
            KeyCode::Char('+' | '=' | 'l') | KeyCode::Right | KeyCode::Up => app.adjust(1),
            KeyCode::Char('-' | '_' | 'h') | KeyCode::Left | KeyCode::Down => app.adjust(-1),
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),

        KeyCode::Char(' ' | 's') => return Some(Action::Start),
        KeyCode::Char('x') => return Some(Action::Stop),

        // Navigation - vim style
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Enter => app.open_selected(),

        KeyCode::Char('?') => {
            app.status = Some(
                "space:start | x:stop | j/k:select | Enter:edit | +/-:adjust | q:quit".to_string(),
            );
        }

        _ => {}
    }

    None
}
