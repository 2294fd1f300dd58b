//! Move history with time travel.
//!
//! A [`Timeline`] owns every board the game has passed through and a pointer
//! to the one currently displayed. Jumping back only moves the pointer;
//! playing from an earlier board discards the boards after it.

use super::action::MoveError;
use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use super::rules::{WinningLine, evaluate};
use super::status::derive_status;
use super::{Board, GameStatus, HistoryEntry, Player, Position, Snapshot};
use tracing::{debug, info, instrument};

/// Game state manager: board history plus the displayed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    boards: Vec<Board>,
    current: usize,
}

impl Timeline {
    /// Creates a timeline holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            current: 0,
        }
    }

    /// Builds a timeline by playing cell indices in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut timeline = Self::new();
        for &index in indices {
            timeline.play_move(index)?;
        }
        Ok(timeline)
    }

    /// Plays the next player's mark at cell `index` (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for an index above 8, otherwise
    /// the same rejections as [`Timeline::play`]. The timeline is unchanged
    /// on error.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn play_move(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(pos)
    }

    /// Plays the next player's mark at `pos`.
    ///
    /// Boards after the current move are discarded before the new board is
    /// appended, and the new board becomes current.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] when the displayed board is won and
    /// [`MoveError::SquareOccupied`] when `pos` is taken. The timeline is
    /// unchanged on error.
    #[instrument(skip(self), fields(current = self.current, player = %self.next_player()))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        let board = *self.current_board();

        if evaluate(&board).is_some() {
            debug!("Rejected: board already won");
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos) {
            debug!("Rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let discarded = self.boards.len() - (self.current + 1);
        self.boards.truncate(self.current + 1);
        self.boards.push(board.with_mark(pos, player));
        self.current = self.boards.len() - 1;

        info!(
            %player,
            position = %pos,
            move_number = self.current,
            discarded,
            "Move played"
        );

        #[cfg(debug_assertions)]
        if let Err(violations) = self.check_invariants() {
            for violation in &violations {
                tracing::error!(invariant = %violation.description, "Timeline invariant violated");
            }
        }

        Ok(())
    }

    /// Displays the board after `move_number` plies.
    ///
    /// History is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoSuchMove`] if `move_number` is past the last
    /// recorded board; the pointer is unchanged.
    #[instrument(skip(self), fields(current = self.current, len = self.boards.len()))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), MoveError> {
        if move_number >= self.boards.len() {
            debug!("Rejected: no such move");
            return Err(MoveError::NoSuchMove(move_number));
        }
        self.current = move_number;
        info!(move_number, "Jumped");
        Ok(())
    }

    /// Discards all history and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Timeline reset");
    }

    /// Board at the current move.
    pub fn current_board(&self) -> &Board {
        &self.boards[self.current]
    }

    /// Index of the displayed board.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// All recorded boards; index 0 is the empty board.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Number of recorded boards (always at least 1).
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false: the empty board is never discarded.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Player to move on the displayed board.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current)
    }

    /// Whether X moves next on the displayed board.
    pub fn x_is_next(&self) -> bool {
        self.next_player() == Player::X
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        derive_status(self.current_board(), self.next_player())
    }

    /// Winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        evaluate(self.current_board())
    }

    /// One history entry per recorded board.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        (0..self.boards.len())
            .map(|n| HistoryEntry::new(n, n == self.current))
            .collect()
    }

    /// Immutable view for rendering.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: *self.current_board(),
            current_move: self.current,
            next_player: self.next_player(),
            status: self.status(),
            winning_line: self.winning_line(),
            entries: self.entries(),
        }
    }

    /// Checks every timeline invariant.
    ///
    /// # Errors
    ///
    /// Returns all violated invariants.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        TimelineInvariants::check_all(self)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(boards: Vec<Board>, current: usize) -> Self {
        Self { boards, current }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
