//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first, enumeration value 0).
    X,
    /// Player O (goes second, enumeration value 1).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the enumeration value of this player.
    pub fn value(self) -> i32 {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }

    /// Creates a player from its enumeration value.
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Player::X),
            1 => Some(Player::O),
            _ => None,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_values() {
        assert_eq!(Player::X.value(), 0);
        assert_eq!(Player::O.value(), 1);
        assert_eq!(Player::from_value(0), Some(Player::X));
        assert_eq!(Player::from_value(1), Some(Player::O));
        assert_eq!(Player::from_value(2), None);
        assert_eq!(Player::from_value(-1), None);
    }

    #[test]
    fn test_board_set_and_count() {
        let mut board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!board.is_empty(Position::Center));
        assert!(board.is_empty(Position::TopLeft));
        assert_eq!(board.occupied_count(), 1);
        assert!(!board.is_full());
    }

    #[test]
    fn test_board_full() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.iter().enumerate() {
            let player = if i % 2 == 0 { Player::X } else { Player::O };
            board.set(*pos, Square::Occupied(player));
        }
        assert!(board.is_full());
        assert_eq!(board.occupied_count(), 9);
    }
}
