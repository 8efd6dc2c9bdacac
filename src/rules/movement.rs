//! Simple-step legality.

use crate::position::Position;
use crate::types::{Board, Square};
use tracing::instrument;

const RED_FORWARD: [(i8, i8); 2] = [(1, 1), (1, -1)];
const BLACK_FORWARD: [(i8, i8); 2] = [(-1, 1), (-1, -1)];
const ALL_DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Diagonal directions the piece on a square may move and capture in.
///
/// Men are limited to the forward directions for their color; kings use
/// all four diagonals. Empty squares have no directions.
pub fn move_directions(square: Square) -> &'static [(i8, i8)] {
    use crate::types::Player::{Black, Red};
    match square {
        Square::Empty => &[],
        Square::Man(Red) => &RED_FORWARD,
        Square::Man(Black) => &BLACK_FORWARD,
        Square::King(_) => &ALL_DIAGONALS,
    }
}

/// Checks whether `piece` standing on `from` may take a plain one-step
/// diagonal to `to`.
///
/// Only the step geometry and the landing square are examined here; the
/// mandatory-capture rule is enforced by the engine because it depends on
/// the whole board, not the moving piece.
#[instrument(skip(board))]
pub fn is_simple_step(board: &Board, piece: Square, from: Position, to: Position) -> bool {
    if !board.is_empty(to) {
        return false;
    }
    let offset = from.offset_to(to);
    move_directions(piece).contains(&offset)
}
