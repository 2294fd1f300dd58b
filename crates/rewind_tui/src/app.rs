//! Application state and key handling.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use rewind_tictactoe::{Position, Snapshot, Timeline};
use tracing::{debug, info, instrument};

use crate::input::{digit_cell, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns the only [`Timeline`]; the renderer reads it through
/// [`App::snapshot`].
#[derive(Debug, Getters)]
pub struct App {
    timeline: Timeline,
    cursor: Position,
    focus: Focus,
    history_selected: usize,
    show_cell_numbers: bool,
}

impl App {
    /// Creates a new application with an empty timeline.
    #[instrument]
    pub fn new(show_cell_numbers: bool) -> Self {
        Self {
            timeline: Timeline::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            history_selected: 0,
            show_cell_numbers,
        }
    }

    /// Immutable view of the game for the next frame.
    pub fn snapshot(&self) -> Snapshot {
        self.timeline.snapshot()
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        if let Some(cell) = digit_cell(key) {
            self.play_cell(cell);
            return AppAction::Continue;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.history_selected = self.timeline.current_move();
            }
            KeyCode::Home => self.jump(0),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play_cell(self.cursor.to_index()),
                Focus::History => self.jump(self.history_selected),
            },
            KeyCode::Up | KeyCode::Down if self.focus == Focus::History => {
                self.move_history_selection(key);
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }

        AppAction::Continue
    }

    /// Plays at `cell`; illegal clicks are ignored.
    fn play_cell(&mut self, cell: usize) {
        match self.timeline.play_move(cell) {
            Ok(()) => {
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
                self.history_selected = self.timeline.current_move();
            }
            Err(e) => debug!(error = %e, "Click ignored"),
        }
    }

    fn jump(&mut self, move_number: usize) {
        match self.timeline.jump_to(move_number) {
            Ok(()) => self.history_selected = move_number,
            Err(e) => debug!(error = %e, "Jump ignored"),
        }
    }

    fn move_history_selection(&mut self, key: KeyCode) {
        let last = self.timeline.len() - 1;
        self.history_selected = match key {
            KeyCode::Up => self.history_selected.saturating_sub(1),
            _ => (self.history_selected + 1).min(last),
        };
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.timeline.reset();
        self.history_selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{GameStatus, Player};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), AppAction::Continue);
        }
    }

    #[test]
    fn test_digits_play_cells() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        assert_eq!(app.timeline().len(), 3);
        assert_eq!(app.cursor(), &Position::Center);
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert!(!app.timeline().current_board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_occupied_click_is_ignored() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);
        assert_eq!(app.timeline().len(), 2);
    }

    #[test]
    fn test_history_focus_jumps() {
        let mut app = App::new(true);
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('5'),
                KeyCode::Char('2'),
                KeyCode::Tab,
                KeyCode::Up,
                KeyCode::Up,
                KeyCode::Enter,
            ],
        );
        assert_eq!(app.focus(), &Focus::History);
        assert_eq!(app.timeline().current_move(), 1);
        assert_eq!(app.timeline().len(), 4);
        assert_eq!(app.snapshot().status, GameStatus::InProgress(Player::O));
    }

    #[test]
    fn test_history_selection_clamps() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Tab, KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.history_selected(), &1);
        press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Up]);
        assert_eq!(app.history_selected(), &0);
    }

    #[test]
    fn test_home_and_restart() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Home]);
        assert_eq!(app.timeline().current_move(), 0);
        assert_eq!(app.timeline().len(), 3);

        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.timeline().len(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(true);
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
    }
}
