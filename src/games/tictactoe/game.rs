//! Game collaborator consumed by snapshot projection.
//!
//! Snapshots never decide whose turn it is or who has won; they read those
//! facts from a [`GameSource`]. [`Game`] is a plain container implementing
//! it: no move validation, no win detection.

use super::position::Position;
use super::types::{Board, Player, Square};
use crate::snapshot::Turn;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Read-only view of a live game, as needed to take a snapshot.
pub trait GameSource {
    /// The occupant of the square at `position`.
    fn square(&self, position: Position) -> Square;

    /// The player whose turn it is.
    fn current_player(&self) -> Turn;

    /// The winner, if one has been decided.
    fn winner(&self) -> Option<Player>;
}

/// Tic-tac-toe game state: board, player to move and recorded winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Option<Player>,
    winner: Option<Player>,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Some(Player::X),
            winner: None,
        }
    }

    /// Creates a game from an existing board with `to_move` to play.
    #[instrument(skip(board))]
    pub fn with_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move: Some(to_move),
            winner: None,
        }
    }

    /// Places `player`'s mark at `pos` and passes the turn to the opponent.
    ///
    /// Overwrites whatever was on the square.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) {
        self.board.set(pos, Square::Occupied(player));
        self.to_move = Some(player.opponent());
        debug!(
            square = %pos,
            occupied = self.board.occupied_count(),
            "Mark placed"
        );
    }

    /// Records the winner, or clears it with `None`.
    #[instrument(skip(self))]
    pub fn set_winner(&mut self, winner: Option<Player>) {
        self.winner = winner;
    }

    /// Ends the game: nobody is left to move.
    #[instrument(skip(self))]
    pub fn finish(&mut self) {
        self.to_move = None;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, if the game is still running.
    pub fn to_move(&self) -> Option<Player> {
        self.to_move
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSource for Game {
    fn square(&self, position: Position) -> Square {
        self.board.get(position)
    }

    fn current_player(&self) -> Turn {
        Turn::from(self.to_move)
    }

    fn winner(&self) -> Option<Player> {
        self.winner
    }
}
