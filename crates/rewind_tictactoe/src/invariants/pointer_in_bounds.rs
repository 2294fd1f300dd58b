//! Pointer invariant: the displayed move is a recorded board.

use super::super::Timeline;
use super::Invariant;

/// Invariant: the timeline is never empty and its pointer indexes a board.
pub struct PointerInBoundsInvariant;

impl Invariant<Timeline> for PointerInBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        !timeline.boards().is_empty() && timeline.current_move() < timeline.boards().len()
    }

    fn description() -> &'static str {
        "Current move indexes a recorded board"
    }
}
