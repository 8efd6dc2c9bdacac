//! The checkers game engine.
//!
//! One mutable [`Game`] owns the board and all turn state. The input
//! collaborator feeds it discrete press/release intents already translated
//! to board coordinates: [`Game::select`] on press, [`Game::release`] on
//! release. The rendering collaborator reads the board, the current
//! player, and the jump flags back out between events; mutation always
//! completes before any read.

use crate::action::{AppliedMove, MoveError, MoveKind};
use crate::invariants::assert_invariants;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The piece picked up by a press, consumed by the matching release.
///
/// Recording the square value at press time (rather than re-deriving it
/// from the current player on release) keeps king moves valid: the piece's
/// identity, not the player's color alone, decides its directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Selection {
    origin: Position,
    piece: Square,
}

/// A complete checkers game: board, turn state, and status.
///
/// All rule enforcement lives behind [`Game::select`] and
/// [`Game::release`]; the board is never mutated any other way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
    selection: Option<Selection>,
    /// Landing square of a capture whose piece must keep jumping.
    pending_jump: Option<Position>,
    /// Captures chained so far in the current turn.
    chained_jumps: u32,
    history: Vec<AppliedMove>,
}

impl Game {
    /// Creates a new game: starting position, Red to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            current_player: Player::Red,
            status: GameStatus::InProgress,
            selection: None,
            pending_jump: None,
            chained_jumps: 0,
            history: Vec::new(),
        }
    }

    /// Creates a game from an arbitrary position with `to_move` to play.
    ///
    /// Intended for tests and analysis positions; the position is taken as
    /// given, including an immediate win when `to_move` has no pieces.
    #[instrument(skip(board))]
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let status = match rules::check_winner(&board, to_move) {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::InProgress,
        };
        Self {
            board,
            current_player: to_move,
            status,
            selection: None,
            pending_jump: None,
            chained_jumps: 0,
            history: Vec::new(),
        }
    }

    /// Resets to the starting position, Red to move.
    ///
    /// The input collaborator calls this for any click received after the
    /// game has ended.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Rebuilds a game by replaying (from, to) intents from the start.
    ///
    /// Each pair is driven through the same select/release path as live
    /// input, so replay enforces every rule.
    #[instrument]
    pub fn replay(moves: &[(Position, Position)]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &(from, to) in moves {
            game.select(from);
            game.release(to)?;
        }
        Ok(game)
    }

    // ─────────────────────────────────────────────────────────
    //  Read surface for the rendering collaborator
    // ─────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the square at the given position.
    pub fn square(&self, pos: Position) -> Square {
        self.board.get(pos)
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the origin of the currently selected piece, if any.
    pub fn selection(&self) -> Option<Position> {
        self.selection.map(|s| s.origin)
    }

    /// Checks if the current player is mid multi-jump ("has to jump again").
    pub fn jump_pending(&self) -> bool {
        self.pending_jump.is_some()
    }

    /// The landing square of the piece that must continue jumping, if any.
    pub fn pending_jump(&self) -> Option<Position> {
        self.pending_jump
    }

    /// Number of captures chained so far in the current turn.
    pub fn chained_jumps(&self) -> u32 {
        self.chained_jumps
    }

    /// Checks if the current player has a capture available ("has to jump").
    pub fn must_jump(&self) -> bool {
        rules::any_capture_available(&self.board, self.current_player)
    }

    /// Returns the applied moves so far, oldest first.
    pub fn history(&self) -> &[AppliedMove] {
        &self.history
    }

    // ─────────────────────────────────────────────────────────
    //  Press / release intents
    // ─────────────────────────────────────────────────────────

    /// Handles a press on a cell, returning whether a piece is now selected.
    ///
    /// A press selects the piece on `pos` iff the game is in progress, the
    /// piece belongs to the current player, and, while a multi-jump is
    /// pending, `pos` is the piece that must continue jumping. Any other
    /// press leaves the selection invalid; no error is signaled.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) -> bool {
        self.selection = None;
        if self.status != GameStatus::InProgress {
            return false;
        }
        if let Some(pending) = self.pending_jump
            && pending != pos
        {
            return false;
        }
        let piece = self.board.get(pos);
        if piece.owner() == Some(self.current_player) {
            self.selection = Some(Selection { origin: pos, piece });
            true
        } else {
            false
        }
    }

    /// Handles a release on a cell: validates and applies the move.
    ///
    /// Implements the full move algorithm: global mandatory capture, simple
    /// steps, two-step captures, promotion, multi-jump continuation, and
    /// turn resolution. The selection is consumed whether or not the move
    /// is accepted, and a rejected move leaves the board untouched.
    #[instrument(skip(self))]
    pub fn release(&mut self, to: Position) -> Result<AppliedMove, MoveError> {
        let selection = self.selection.take();
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        let Selection { origin, piece } = selection.ok_or(MoveError::NoSelection)?;
        if !self.board.is_empty(to) {
            return Err(MoveError::DestinationOccupied(to));
        }

        let (d_row, d_col) = origin.offset_to(to);
        let kind = match (d_row.abs(), d_col.abs()) {
            (1, 1) => {
                if !rules::is_simple_step(&self.board, piece, origin, to) {
                    return Err(MoveError::IllegalStep { from: origin, to });
                }
                if self.must_jump() {
                    return Err(MoveError::CaptureRequired);
                }
                MoveKind::Simple
            }
            (2, 2) => {
                if !rules::move_directions(piece).contains(&(d_row / 2, d_col / 2)) {
                    return Err(MoveError::IllegalStep { from: origin, to });
                }
                // `between` is on the board whenever the landing square is.
                let over = origin.between(to).ok_or(MoveError::IllegalStep {
                    from: origin,
                    to,
                })?;
                if self.board.get(over).owner() != Some(self.current_player.opponent()) {
                    return Err(MoveError::NothingToCapture(over));
                }
                MoveKind::Capture { captured: over }
            }
            _ => return Err(MoveError::IllegalStep { from: origin, to }),
        };

        self.apply(origin, to, piece, kind)
    }

    /// Mutates the board for an accepted move and resolves the turn.
    fn apply(
        &mut self,
        from: Position,
        to: Position,
        piece: Square,
        kind: MoveKind,
    ) -> Result<AppliedMove, MoveError> {
        let player = self.current_player;
        self.board.set(from, Square::Empty);
        if let MoveKind::Capture { captured } = kind {
            self.board.set(captured, Square::Empty);
        }

        let promoted = !piece.is_king() && to.row() == player.crowning_row();
        let landed = if promoted { piece.crowned() } else { piece };
        self.board.set(to, landed);

        // Promotion always ends the turn, even when the new king could
        // capture. A non-promoting capture keeps the turn while the landed
        // piece can still jump.
        let turn_passed = if !promoted
            && kind.is_capture()
            && rules::piece_can_capture(&self.board, to)
        {
            self.pending_jump = Some(to);
            self.chained_jumps += 1;
            false
        } else {
            self.pass_turn();
            true
        };

        let applied = AppliedMove {
            player,
            from,
            to,
            kind,
            promoted,
            turn_passed,
        };
        debug!(%applied, turn_passed, "move applied");
        self.history.push(applied);
        assert_invariants(self);
        Ok(applied)
    }

    /// Hands the turn to the opponent and evaluates the win condition.
    fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.pending_jump = None;
        self.chained_jumps = 0;
        if let Some(winner) = rules::check_winner(&self.board, self.current_player) {
            self.status = GameStatus::Won(winner);
            debug!(winner = %winner, "game over");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
