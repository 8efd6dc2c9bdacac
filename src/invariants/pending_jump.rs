//! Pending multi-jumps always have a jump to make.

use super::Invariant;
use crate::engine::Game;
use crate::rules;

/// A pending multi-jump square holds a current-player piece that can capture.
///
/// The engine only records a pending jump when the piece that just captured
/// has another capture from its landing square; the turn passes otherwise.
pub struct PendingJumpInvariant;

impl Invariant<Game> for PendingJumpInvariant {
    fn holds(state: &Game) -> bool {
        match state.pending_jump() {
            None => true,
            Some(pos) => {
                state.square(pos).owner() == Some(state.current_player())
                    && rules::piece_can_capture(state.board(), pos)
            }
        }
    }

    fn description() -> &'static str {
        "A pending multi-jump piece belongs to the current player and can capture"
    }
}
