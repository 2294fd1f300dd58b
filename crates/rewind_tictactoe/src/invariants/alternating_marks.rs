//! Turn invariant: marks alternate starting with X.

use super::super::{Player, Square, Timeline};
use super::Invariant;

/// Invariant: board `n` holds `ceil(n/2)` X marks and `floor(n/2)` O marks.
///
/// Together with [`SinglePlyStepInvariant`](super::SinglePlyStepInvariant)
/// this pins the mark of every ply: X on odd plies, O on even ones.
pub struct AlternatingMarksInvariant;

impl Invariant<Timeline> for AlternatingMarksInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.boards().iter().enumerate().all(|(n, board)| {
            let count = |player| {
                board
                    .squares()
                    .iter()
                    .filter(|s| **s == Square::Occupied(player))
                    .count()
            };
            count(Player::X) == n.div_ceil(2) && count(Player::O) == n / 2
        })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, ... starting from an empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_played_timeline_holds() {
        let timeline = Timeline::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert!(AlternatingMarksInvariant::holds(&timeline));
    }

    #[test]
    fn test_o_first_violates() {
        let first = Board::new().with_mark(Position::Center, Player::O);
        let timeline = Timeline::from_parts(vec![Board::new(), first], 1);
        assert!(!AlternatingMarksInvariant::holds(&timeline));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let start = Board::new().with_mark(Position::Center, Player::X);
        let timeline = Timeline::from_parts(vec![start], 0);
        assert!(!AlternatingMarksInvariant::holds(&timeline));
    }
}
