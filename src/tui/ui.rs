//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::{App, Card};
use crate::workout::{format_time, Phase};

/// Background colour of a phase.
#[must_use]
pub const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Idle => Color::Magenta,
        Phase::Work => Color::Green,
        Phase::Rest => Color::Red,
        Phase::Reset => Color::Yellow,
        Phase::Finished => Color::DarkGray,
    }
}

const fn card_color(card: Card) -> Color {
    match card {
        Card::Work => Color::Green,
        Card::Rest => Color::Red,
        Card::Reset => Color::Yellow,
        Card::Rounds => Color::Blue,
        Card::Exercises => Color::Cyan,
    }
}

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App<'_>) {
    let bg = phase_color(app.session.phase());
    frame.render_widget(
        Block::default().style(Style::default().bg(bg).fg(Color::White)),
        frame.area(),
    );

    // Layout: clock, progress, settings cards, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Clock
            Constraint::Length(1), // Progress
            Constraint::Length(7), // Cards
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_clock(frame, app, chunks[0]);
    render_progress(frame, app, chunks[1]);
    render_cards(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    if let Some(card) = app.modal {
        render_modal(frame, app, card);
    }
}

/// Render the big clock with phase, round and exercise.
fn render_clock(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let phase = app.session.phase();
    let label = if app.session.is_running() {
        phase.display_name().to_uppercase()
    } else if phase == Phase::Finished {
        "FINISHED".to_string()
    } else {
        "INTERVAL TIMER".to_string()
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            label,
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format_time(app.display_seconds()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if app.session.is_running() {
        lines.push(Line::from(format!(
            "Round {}/{}",
            app.session.round(),
            app.workout.rounds
        )));
        if let Some(name) = app.current_exercise() {
            lines.push(Line::from(Span::styled(
                name.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "▶  press space to start",
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    let clock = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(clock, area);
}

/// Render progress through the current phase.
fn render_progress(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    if !app.session.is_running() {
        return;
    }
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::White).bg(Color::Black))
        .ratio(app.phase_progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, area);
}

/// Render the settings cards.
fn render_cards(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem<'_>> = Card::ALL
        .iter()
        .enumerate()
        .map(|(i, &card)| {
            let value = app.card_value(card);
            let pad = width.saturating_sub(card.label().len() + value.len());
            let line = Line::from(vec![
                Span::raw(card.label()),
                Span::raw(" ".repeat(pad)),
                Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
            ]);

            let style = if i == app.selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black).fg(Color::White)),
    );

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start | x:stop | j/k:select | Enter:edit | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::Gray).bg(Color::Black));

    frame.render_widget(status, area);
}

/// Render the adjust dialog over the whole screen.
fn render_modal(frame: &mut Frame<'_>, app: &App<'_>, card: Card) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", card.title()))
        .title_bottom(Line::from(" +/-: adjust | Esc: close ").alignment(Alignment::Right))
        .style(Style::default().bg(card_color(card)).fg(Color::White));

    let value = match card.setting() {
        Some(setting) if !setting.is_duration() => app.workout.rounds.to_string(),
        _ => app.card_value(card),
    };

    let mut lines = Vec::new();
    let top = area.height.saturating_sub(4) / 2;
    for _ in 0..top {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::raw("−      "),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("      +"),
    ]));

    if card == Card::Exercises {
        lines.push(Line::from(""));
        for (i, exercise) in app.workout.exercises.iter().enumerate() {
            lines.push(Line::from(format!("{}. {}", i + 1, exercise.name)));
        }
    }

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(dialog, area);
}
