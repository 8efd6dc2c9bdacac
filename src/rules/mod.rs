//! Game rules for checkers.
//!
//! This module contains pure functions for evaluating board positions
//! according to checkers rules. Rules are separated from the engine's
//! mutable state so they can be tested and composed independently.

pub mod capture;
pub mod movement;
pub mod win;

pub use capture::{any_capture_available, capture_landing, piece_can_capture};
pub use movement::{is_simple_step, move_directions};
pub use win::check_winner;
