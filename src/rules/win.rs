//! Win detection for checkers.

use crate::types::{Board, Player};
use tracing::instrument;

/// Checks whether the side to move has already lost.
///
/// A player with zero remaining pieces (men or kings) when their turn comes
/// up has lost; the opponent wins. Returns `None` while both sides still
/// have material.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, to_move: Player) -> Option<Player> {
    if board.count(to_move) == 0 {
        Some(to_move.opponent())
    } else {
        None
    }
}
