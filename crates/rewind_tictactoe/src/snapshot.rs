//! Immutable per-render view of a timeline.

use super::rules::WinningLine;
use super::{Board, GameStatus, HistoryEntry, Player, Position};
use serde::Serialize;

/// Everything a renderer needs for one frame.
///
/// Built by [`Timeline::snapshot`](crate::Timeline::snapshot); holds copies,
/// so later moves never change a snapshot already handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Board at the current move.
    pub board: Board,
    /// Index of the displayed board in the history.
    pub current_move: usize,
    /// Player to move on the displayed board.
    pub next_player: Player,
    /// Status line for the displayed board.
    pub status: GameStatus,
    /// Line to highlight, if the displayed board is won.
    pub winning_line: Option<WinningLine>,
    /// One entry per recorded board, in order.
    pub entries: Vec<HistoryEntry>,
}

impl Snapshot {
    /// Whether the cell at `pos` belongs to the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }
}
