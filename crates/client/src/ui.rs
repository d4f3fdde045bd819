//! UI rendering for the roster screen and modal forms.
//!
//! Layout, top to bottom: roster list, message log, key hints. Forms are
//! drawn as centered modals over the roster.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::app::App;
use crate::message::MessageLevel;
use crate::state::{AppMode, FormState};

const LOG_PANEL_HEIGHT: u16 = 8;

/// Render the full frame for the current app state.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(LOG_PANEL_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_roster(frame, chunks[0], app);
    render_log(frame, chunks[1], app);
    render_hints(frame, chunks[2], app);

    match &app.mode {
        AppMode::AddHoard(form) | AppMode::ResolveDamage(form) => {
            render_form(frame, form);
        }
        AppMode::Roster => {}
    }
}

fn render_roster(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .roster
        .iter()
        .map(|hoard| ListItem::new(hoard.to_string()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Hoards "))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !app.roster.is_empty() {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_log(frame: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = app
        .messages
        .recent(visible)
        .map(|entry| Line::styled(entry.text.clone(), level_style(entry.level)))
        .collect();
    // recent() is newest-first; the panel reads top-down.
    lines.reverse();

    let log = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Log "));
    frame.render_widget(log, area);
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.mode.is_form() {
        " Enter submit | Tab next field | Esc cancel"
    } else {
        " a add | d remove | s make a save | Up/Down select | q quit"
    };

    let line = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(line, area);
}

fn render_form(frame: &mut Frame, form: &FormState) {
    let area = centered_rect(60, (form.fields.len() as u16 + 4).max(9), frame.area());

    let mut lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let focused = index == form.focus;
            let label_style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let cursor = if focused { "_" } else { "" };

            Line::from(vec![
                Span::styled(format!("{}: ", field.label), label_style),
                Span::raw(field.value.clone()),
                Span::styled(cursor, Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ])
        })
        .collect();

    if let Some(error) = &form.error {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("Invalid input: {error}"),
            Style::default().fg(Color::Red),
        ));
    }

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(form.title)
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn level_style(level: MessageLevel) -> Style {
    match level {
        MessageLevel::Info => Style::default(),
        MessageLevel::Error => Style::default().fg(Color::Red),
    }
}

/// Fixed-height rectangle centered in `area`, `percent_x` wide.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
