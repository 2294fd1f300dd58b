//! Rejection reasons for timeline operations.

use super::Position;

/// Why a move or jump was not applied.
///
/// A rejection never changes the timeline; hosts are free to ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The displayed board already has a winning line.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is outside 0-8.
    #[display("Position {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(#[error(not(source))] usize),

    /// The move number does not exist in the history.
    #[display("No move #{_0} in history")]
    NoSuchMove(#[error(not(source))] usize),
}
