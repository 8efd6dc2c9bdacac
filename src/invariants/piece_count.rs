//! Piece counts never exceed the starting material.

use super::Invariant;
use crate::engine::Game;
use crate::types::Player;
use strum::IntoEnumIterator;

/// Neither side ever has more than twelve pieces on the board.
///
/// Moves only relocate or remove pieces; nothing is ever added after
/// `Board::starting_position`, so a count above twelve means the board was
/// corrupted outside the engine.
pub struct PieceCountInvariant;

impl Invariant<Game> for PieceCountInvariant {
    fn holds(state: &Game) -> bool {
        Player::iter().all(|player| state.board().count(player) <= 12)
    }

    fn description() -> &'static str {
        "Each side has at most twelve pieces"
    }
}
