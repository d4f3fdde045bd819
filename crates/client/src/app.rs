//! Application loop, key handling, and roster mutation.
//!
//! The app owns the roster of hoards as presentation state, exactly as the
//! reference tracker keeps its creature list next to the listbox. Every
//! rules decision is delegated to `hoard-core`; this module only routes
//! keys, calls the two core entry points, and reports outcomes.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use hoard_core::{Hoard, combat::resolve_area_damage};

use crate::config::CliConfig;
use crate::input;
use crate::message::{MessageLevel, MessageLog};
use crate::state::{AppMode, FormState};
use crate::terminal::Tui;
use crate::ui;

/// Top-level application container.
pub struct App {
    pub(crate) roster: Vec<Hoard>,
    pub(crate) selected: usize,
    pub(crate) mode: AppMode,
    pub(crate) messages: MessageLog,
    should_quit: bool,
}

impl App {
    pub fn new(config: &CliConfig) -> Self {
        Self {
            roster: Vec::new(),
            selected: 0,
            mode: AppMode::Roster,
            messages: MessageLog::new(config.message_capacity),
            should_quit: false,
        }
    }

    /// Blocking draw/input loop. Returns when the user quits.
    pub fn run(mut self, terminal: &mut Tui) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, &self))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }
        }

        tracing::info!("Client shutting down");
        Ok(())
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if self.mode.is_form() {
            self.handle_form_key(key);
        } else {
            self.handle_roster_key(key);
        }
    }

    fn handle_roster_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('a') => self.mode = AppMode::AddHoard(FormState::add_hoard()),
            KeyCode::Char('d') => self.remove_selected(),
            KeyCode::Char('s') => {
                if self.roster.is_empty() {
                    self.messages
                        .push("No hoard to make a save for", MessageLevel::Error);
                } else {
                    self.mode = AppMode::ResolveDamage(FormState::resolve_damage());
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.roster.len() {
                    self.selected += 1;
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = AppMode::Roster;
                return;
            }
            KeyCode::Enter => {
                self.submit_form();
                return;
            }
            _ => {}
        }

        let form = match &mut self.mode {
            AppMode::AddHoard(form) | AppMode::ResolveDamage(form) => form,
            AppMode::Roster => return,
        };

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Char(c) => form.push_char(c),
            _ => {}
        }
    }

    fn remove_selected(&mut self) {
        if self.roster.is_empty() {
            self.messages
                .push("No hoard selected to remove", MessageLevel::Error);
            return;
        }

        let hoard = self.roster.remove(self.selected);
        self.clamp_selection();

        tracing::info!(name = hoard.name(), "hoard removed from roster");
        self.messages.info(format!("Removed {}", hoard.name()));
    }

    fn submit_form(&mut self) {
        match std::mem::replace(&mut self.mode, AppMode::Roster) {
            AppMode::AddHoard(form) => self.submit_add(form),
            AppMode::ResolveDamage(form) => self.submit_resolve(form),
            AppMode::Roster => {}
        }
    }

    fn submit_add(&mut self, mut form: FormState) {
        match input::parse_hoard(&form) {
            Ok(hoard) => {
                tracing::info!(%hoard, "hoard added");
                self.messages.info(format!("Added {hoard}"));
                self.roster.push(hoard);
                self.selected = self.roster.len() - 1;
            }
            Err(err) => {
                form.error = Some(err.to_string());
                self.mode = AppMode::AddHoard(form);
            }
        }
    }

    fn submit_resolve(&mut self, mut form: FormState) {
        let attack = match input::parse_attack(&form) {
            Ok(attack) => attack,
            Err(err) => {
                form.error = Some(err.to_string());
                self.mode = AppMode::ResolveDamage(form);
                return;
            }
        };

        let Some(hoard) = self.roster.get_mut(self.selected) else {
            return;
        };

        match resolve_area_damage(hoard, &attack) {
            Ok(outcome) => {
                let name = hoard.name().to_string();
                tracing::info!(
                    name = %name,
                    final_damage = outcome.final_damage,
                    killed = outcome.killed,
                    survivors = outcome.survivors_remaining,
                    destroyed = outcome.hoard_destroyed,
                    "damage resolved"
                );

                if outcome.hoard_destroyed {
                    self.roster.remove(self.selected);
                    self.clamp_selection();
                    self.messages.push(
                        format!(
                            "{name} took {} damage and has been destroyed!",
                            outcome.final_damage
                        ),
                        MessageLevel::Info,
                    );
                } else {
                    self.messages.info(format!(
                        "{name} took {} damage: {} destroyed, {} remain with {} HP total",
                        outcome.final_damage,
                        outcome.killed,
                        outcome.survivors_remaining,
                        outcome.survivors_total_hp
                    ));
                }
            }
            Err(err) => {
                form.error = Some(err.to_string());
                self.mode = AppMode::ResolveDamage(form);
            }
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.roster.len() {
            self.selected = self.roster.len().saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        App::new(&CliConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    /// Drives the add-hoard form end to end through key events.
    fn add_hoard(app: &mut App, name: &str, count: &str, size: &str, hp: &str) {
        app.handle_key(key(KeyCode::Char('a')));
        for text in [name, count, size] {
            type_text(app, text);
            app.handle_key(key(KeyCode::Tab));
        }
        type_text(app, hp);
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn add_form_creates_a_roster_entry() {
        let mut app = app();
        add_hoard(&mut app, "Goblin", "3", "small", "10");

        assert_eq!(app.mode, AppMode::Roster);
        assert_eq!(app.roster.len(), 1);
        assert_eq!(app.roster[0].total_hp(), 30);
    }

    #[test]
    fn invalid_add_keeps_the_form_open_with_an_error() {
        let mut app = app();
        add_hoard(&mut app, "Goblin", "zero", "small", "10");

        assert!(app.roster.is_empty());
        match &app.mode {
            AppMode::AddHoard(form) => {
                assert_eq!(form.error.as_deref(), Some("count must be a number"));
                assert_eq!(form.value(crate::state::add_field::NAME), "Goblin");
            }
            other => panic!("expected add form to stay open, got {other:?}"),
        }
    }

    #[test]
    fn resolving_overwhelming_damage_removes_the_hoard() {
        let mut app = app();
        add_hoard(&mut app, "Goblin", "3", "medium", "10");

        app.handle_key(key(KeyCode::Char('s')));
        for text in ["40", "cube", "30", "none"] {
            type_text(&mut app, text);
            app.handle_key(key(KeyCode::Tab));
        }
        type_text(&mut app, "0");
        app.handle_key(key(KeyCode::Enter));

        assert!(app.roster.is_empty());
        assert_eq!(app.mode, AppMode::Roster);
    }

    #[test]
    fn resolving_partial_damage_keeps_survivors() {
        let mut app = app();
        add_hoard(&mut app, "Orc", "2", "medium", "20");

        // (5/5) * 25 = 25: kills one orc, wounds the other to 15.
        app.handle_key(key(KeyCode::Char('s')));
        for text in ["25", "cube", "5", "half"] {
            type_text(&mut app, text);
            app.handle_key(key(KeyCode::Tab));
        }
        type_text(&mut app, "0");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.roster.len(), 1);
        assert_eq!(app.roster[0].count(), 1);
        assert_eq!(app.roster[0].total_hp(), 15);
    }

    #[test]
    fn save_key_is_ignored_with_an_empty_roster() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.mode, AppMode::Roster);
    }

    #[test]
    fn escape_cancels_a_form_without_side_effects() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a')));
        type_text(&mut app, "Goblin");
        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.mode, AppMode::Roster);
        assert!(app.roster.is_empty());
    }
}
