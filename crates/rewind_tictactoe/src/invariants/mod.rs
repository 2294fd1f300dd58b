//! First-class invariants for a timeline.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are testable independently and are checked in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    #[error(not(source))]
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for 2- and 3-tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_marks;
pub mod pointer_in_bounds;
pub mod single_ply_step;

pub use alternating_marks::AlternatingMarksInvariant;
pub use pointer_in_bounds::PointerInBoundsInvariant;
pub use single_ply_step::SinglePlyStepInvariant;

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    PointerInBoundsInvariant,
    SinglePlyStepInvariant,
    AlternatingMarksInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Position, Timeline};

    #[test]
    fn test_invariant_set_holds_for_new_timeline() {
        assert!(TimelineInvariants::check_all(&Timeline::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut timeline = Timeline::replay(&[4, 0, 8, 2]).unwrap();
        timeline.jump_to(1).unwrap();
        timeline.play_move(1).unwrap();
        assert!(TimelineInvariants::check_all(&timeline).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Board 1 places two marks, one of them O.
        let corrupted = Board::new()
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::Center, Player::X);
        let timeline = Timeline::from_parts(vec![Board::new(), corrupted], 1);

        let violations = TimelineInvariants::check_all(&timeline).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations[0].to_string().starts_with("Invariant violated: "));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (PointerInBoundsInvariant, SinglePlyStepInvariant);
        assert!(TwoInvariants::check_all(&Timeline::new()).is_ok());
    }
}
