//! Display status derived from a board.

use super::rules::{evaluate, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing; holds the player to move.
    #[display("Next player: {_0}")]
    InProgress(Player),
    /// A winning line exists; holds the player who completed it.
    #[display("Winner: {_0}")]
    Won(Player),
    /// Board is full with no winning line.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Returns true once the board is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

/// Derives the status of `board` given the player to move next.
///
/// On a win the winner is reported as `next.opponent()`: the player who
/// just moved completed the line.
#[instrument(skip(board))]
pub fn derive_status(board: &Board, next: Player) -> GameStatus {
    if evaluate(board).is_some() {
        GameStatus::Won(next.opponent())
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress(next)
    }
}
