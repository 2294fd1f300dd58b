//! Pure tic-tac-toe game logic with a rewindable move history.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw detection over a [`Board`]
//! - **Timeline**: owns every board played so far and the displayed move
//! - **Snapshot**: immutable per-frame view handed to a renderer
//! - **Invariants**: properties of a [`Timeline`] checked in debug builds
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameStatus, Player, Timeline};
//!
//! let mut timeline = Timeline::replay(&[0, 4, 1, 5, 2]).unwrap();
//! assert_eq!(timeline.status(), GameStatus::Won(Player::X));
//!
//! timeline.jump_to(2).unwrap();
//! timeline.play_move(8).unwrap();
//! assert_eq!(timeline.len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod entry;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod status;
mod timeline;
mod types;

pub use action::MoveError;
pub use entry::HistoryEntry;
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TimelineInvariants};
pub use position::Position;
pub use rules::{WinningLine, evaluate};
pub use snapshot::Snapshot;
pub use status::{GameStatus, derive_status};
pub use timeline::Timeline;
pub use types::{Board, Player, Square};

/// Alias for clarity in rendering code.
pub type Mark = Player;
