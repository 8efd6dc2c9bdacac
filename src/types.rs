//! Core domain types for checkers.

use crate::position::{BOARD_SIZE, Position};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// Red (moves first, toward increasing rows).
    Red,
    /// Black (moves second, toward decreasing rows).
    Black,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Row delta of a forward step for this player's men.
    pub fn forward(self) -> i8 {
        match self {
            Player::Red => 1,
            Player::Black => -1,
        }
    }

    /// The far rank where this player's men are crowned.
    pub fn crowning_row(self) -> u8 {
        match self {
            Player::Red => BOARD_SIZE - 1,
            Player::Black => 0,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// A square on the checkers board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// An uncrowned piece, moves and captures forward only.
    Man(Player),
    /// A crowned piece, moves and captures in all four diagonal directions.
    King(Player),
}

impl Square {
    /// The player owning the piece on this square, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Man(player) | Square::King(player) => Some(player),
        }
    }

    /// Checks if this square is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Checks if this square holds a crowned piece.
    pub fn is_king(self) -> bool {
        matches!(self, Square::King(_))
    }

    /// The crowned variant of this piece; kings never demote.
    pub fn crowned(self) -> Self {
        match self {
            Square::Man(player) => Square::King(player),
            other => other,
        }
    }

    /// Single-character symbol used by [`Board::display`].
    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Man(Player::Red) => 'r',
            Square::Man(Player::Black) => 'b',
            Square::King(Player::Red) => 'R',
            Square::King(Player::Black) => 'B',
        }
    }
}

/// 8x8 checkers board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed `[row][col]`.
    squares: [[Square; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Creates a board with the standard starting layout.
    ///
    /// The parity pattern matches the original game exactly: red men on even
    /// columns of rows 0 and 2 and odd columns of row 1, black men mirrored
    /// on rows 5-7, rows 3-4 empty. Twelve men per side.
    pub fn starting_position() -> Self {
        let mut board = Self::new();
        for pos in Position::all() {
            let square = match (pos.row(), pos.col() % 2) {
                (0 | 2, 0) | (1, 1) => Square::Man(Player::Red),
                (5 | 7, 1) | (6, 0) => Square::Man(Player::Black),
                _ => Square::Empty,
            };
            board.set(pos, square);
        }
        board
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.row() as usize][pos.col() as usize]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.row() as usize][pos.col() as usize] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Counts the remaining pieces (men and kings) of a player.
    pub fn count(&self, player: Player) -> usize {
        Position::all()
            .filter(|&pos| self.get(pos).owner() == Some(player))
            .count()
    }

    /// Iterates over the positions of a player's pieces.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| self.get(pos).owner() == Some(player))
    }

    /// Formats the board as a human-readable grid, row 0 on top.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in self.squares.iter() {
            for square in row.iter() {
                result.push(square.symbol());
                result.push(' ');
            }
            result.pop();
            result.push('\n');
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended: a player captured all opposing pieces.
    Won(Player),
}

impl GameStatus {
    /// Returns the winner if the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(*player),
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{player} won"),
        }
    }
}
