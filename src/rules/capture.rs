//! Capture geometry and the mandatory-capture scan.
//!
//! A capture jumps two diagonal steps, removing the opponent piece (man or
//! king) on the intervening square; the landing square must be empty. Men
//! capture forward only, kings in all four diagonals. Every lookup goes
//! through [`Position::step`], so edge-of-board geometry never indexes out
//! of bounds.

use crate::position::Position;
use crate::rules::movement::move_directions;
use crate::types::{Board, Player};
use tracing::instrument;

/// Resolves one capture direction from a square.
///
/// Returns `(captured, landing)` when the piece on `from` can jump in
/// `dir`: the adjacent square holds an opponent piece and the square two
/// steps out is empty and on the board.
pub fn capture_landing(
    board: &Board,
    from: Position,
    dir: (i8, i8),
) -> Option<(Position, Position)> {
    let mover = board.get(from).owner()?;
    let over = from.step(dir.0, dir.1)?;
    let landing = over.step(dir.0, dir.1)?;
    if board.get(over).owner() == Some(mover.opponent()) && board.is_empty(landing) {
        Some((over, landing))
    } else {
        None
    }
}

/// Checks whether the piece on `from` has at least one capture.
///
/// Drives multi-jump continuation: after a jump lands, the same piece must
/// keep jumping while this returns true.
#[instrument(skip(board))]
pub fn piece_can_capture(board: &Board, from: Position) -> bool {
    move_directions(board.get(from))
        .iter()
        .any(|&dir| capture_landing(board, from, dir).is_some())
}

/// Checks whether any piece of `player` has a capture available.
///
/// When this holds, simple moves are illegal for the whole turn, not just
/// for the selected piece.
#[instrument(skip(board))]
pub fn any_capture_available(board: &Board, player: Player) -> bool {
    board.pieces(player).any(|pos| piece_can_capture(board, pos))
}
