//! The won status agrees with the material on the board.

use super::Invariant;
use crate::engine::Game;
use crate::types::GameStatus;

/// `Won(p)` holds exactly when the opponent of `p` has no pieces left.
///
/// While the game is in progress both sides have material; once a side is
/// wiped out the status must say so.
pub struct TerminalStatusInvariant;

impl Invariant<Game> for TerminalStatusInvariant {
    fn holds(state: &Game) -> bool {
        match state.status() {
            GameStatus::Won(winner) => state.board().count(winner.opponent()) == 0,
            GameStatus::InProgress => {
                state.board().count(state.current_player()) > 0
                    && state.board().count(state.current_player().opponent()) > 0
            }
        }
    }

    fn description() -> &'static str {
        "Game status matches the material remaining on the board"
    }
}
