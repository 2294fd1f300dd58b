//! Step invariant: each board adds exactly one mark to its predecessor.

use super::super::{Position, Square, Timeline};
use super::Invariant;

/// Invariant: consecutive boards differ in exactly one square, which went
/// from empty to occupied.
pub struct SinglePlyStepInvariant;

impl Invariant<Timeline> for SinglePlyStepInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.boards().windows(2).all(|pair| {
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|pos| pair[0].get(*pos) != pair[1].get(*pos))
                .collect();

            matches!(changed.as_slice(), [pos] if pair[0].get(*pos) == Square::Empty)
        })
    }

    fn description() -> &'static str {
        "Each board adds exactly one mark to the previous board"
    }
}
