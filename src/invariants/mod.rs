//! First-class invariants for the checkers engine.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as documentation
//! of system guarantees.

use crate::engine::Game;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
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
/// Implementations are provided for tuples so game-specific invariants
/// compose into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or `Err` with the list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
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

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod pending_jump;
pub mod piece_count;
pub mod terminal_status;

pub use pending_jump::PendingJumpInvariant;
pub use piece_count::PieceCountInvariant;
pub use terminal_status::TerminalStatusInvariant;

/// All checkers invariants as a composable set.
pub type CheckersInvariants = (
    PieceCountInvariant,
    PendingJumpInvariant,
    TerminalStatusInvariant,
);

/// Checks all invariants after a move, panicking in debug builds.
pub(crate) fn assert_invariants(game: &Game) {
    if let Err(violations) = CheckersInvariants::check_all(game) {
        for violation in &violations {
            warn!(invariant = %violation.description, "invariant violated");
        }
        debug_assert!(violations.is_empty(), "invariants violated: {violations:?}");
    }
}
