//! Checkers (draughts) rules engine.
//!
//! A two-player checkers game engine driven by discrete press/release
//! intents: the host UI translates pixels to board cells and forwards
//! `select` on press and `release` on release, then reads the board and
//! turn state back out to redraw. The engine owns all rule enforcement:
//! mandatory captures, multi-jump sequences, king promotion, and win
//! detection.
//!
//! # Architecture
//!
//! - **Types**: `Player`, `Square`, `Board`, `GameStatus` — the data model
//! - **Position**: bounds-safe board coordinates
//! - **Rules**: pure legality predicates (movement, capture, win)
//! - **Engine**: the mutable `Game` state machine
//! - **Invariants**: first-class runtime checks of system guarantees
//!
//! # Example
//!
//! ```
//! use checkers_core::{Game, Position};
//!
//! let mut game = Game::new();
//!
//! // Red opens with a simple diagonal step.
//! let from = Position::new(2, 2).unwrap();
//! let to = Position::new(3, 3).unwrap();
//! assert!(game.select(from));
//! let applied = game.release(to).expect("legal opening move");
//! assert!(applied.turn_passed);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

// Crate-level exports - move records and rejection reasons
pub use action::{AppliedMove, MoveError, MoveKind};

// Crate-level exports - the game engine
pub use engine::Game;

// Crate-level exports - board coordinates
pub use position::{BOARD_SIZE, Position};

// Crate-level exports - domain types
pub use types::{Board, GameStatus, Player, Square};
