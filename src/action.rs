//! First-class move records and rejection reasons.
//!
//! Moves are domain events, not side effects. The engine returns an
//! [`AppliedMove`] for every accepted release so the move can be logged,
//! serialized for replay, and asserted on in tests. The original game
//! absorbs every illegal release silently; [`MoveError`] exists purely so
//! that rejection is observable — callers wanting the original behavior
//! just discard the `Err`.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// How a move traveled: a plain diagonal step or a jump over a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// One diagonal step to an empty square.
    Simple,
    /// Two diagonal steps, removing the opponent piece jumped over.
    Capture {
        /// The square of the removed piece.
        captured: Position,
    },
}

impl MoveKind {
    /// Checks if this move removed a piece.
    pub fn is_capture(&self) -> bool {
        matches!(self, MoveKind::Capture { .. })
    }
}

/// A move that has been validated and applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppliedMove {
    /// The player who moved.
    pub player: Player,
    /// Origin square.
    pub from: Position,
    /// Landing square.
    pub to: Position,
    /// Simple step or capture.
    pub kind: MoveKind,
    /// True when a man reached the far rank and was crowned by this move.
    pub promoted: bool,
    /// True when the turn passed to the opponent; false while the same
    /// piece must continue a multi-jump sequence.
    pub turn_passed: bool,
}

impl std::fmt::Display for AppliedMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            MoveKind::Simple => write!(f, "{} {} -> {}", self.player, self.from, self.to),
            MoveKind::Capture { captured } => {
                write!(f, "{} {} x{} -> {}", self.player, self.from, captured, self.to)
            }
        }
    }
}

/// Reason a release was rejected; the board is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// No valid piece was selected by the preceding press.
    #[display("No piece is selected")]
    NoSelection,

    /// The landing square is occupied.
    #[display("Square {_0} is occupied")]
    DestinationOccupied(Position),

    /// The step is not a legal diagonal for the selected piece.
    #[display("Illegal step from {from} to {to}")]
    IllegalStep {
        /// Origin square.
        from: Position,
        /// Attempted landing square.
        to: Position,
    },

    /// A capture is available somewhere, so simple moves are forbidden.
    #[display("A capture is available and must be taken")]
    CaptureRequired,

    /// The jumped-over square does not hold an opponent piece.
    #[display("Nothing to capture on {_0}")]
    NothingToCapture(Position),
}

impl std::error::Error for MoveError {}
