//! Game views: projection from a live game and structured rendering.

use super::cell::BoardSnapshot;
use super::label::{Turn, Winner};
use crate::games::tictactoe::GameSource;
use derive_new::new;
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// Immutable snapshot of a game: board cells, current player and winner.
///
/// Projection is pure. Writing the text summary is a separate step, see
/// [`crate::record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct GameView {
    board: BoardSnapshot,
    current_player: Turn,
    winner: Winner,
}

impl GameView {
    /// Projects `game` into a view.
    #[instrument(skip(game))]
    pub fn project(game: &impl GameSource) -> Self {
        let board = BoardSnapshot::capture(game);
        let current_player = game.current_player();
        let winner = Winner::from(game.winner());
        debug!(
            playable = board.playable_positions().len(),
            current_player = %current_player.label(),
            winner = %winner.label(),
            "Projected game view"
        );
        Self::new(board, current_player, winner)
    }

    /// The board cells.
    pub fn board(&self) -> &BoardSnapshot {
        &self.board
    }

    /// The player to move.
    pub fn current_player(&self) -> Turn {
        self.current_player
    }

    /// The winner state.
    pub fn winner(&self) -> Winner {
        self.winner
    }

    /// Renders the structured string:
    /// `{"cells":[...],"currentPlayer":"X","winner":"-1"}`.
    ///
    /// Labels are written verbatim, nothing is escaped.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Two-line text summary written to the artifact.
    pub fn summary(&self) -> String {
        format!(
            "Current player: {}\nWinner: {}",
            self.current_player.label(),
            self.winner.label()
        )
    }
}

impl fmt::Display for GameView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{{"cells":{},"currentPlayer":"{}","winner":"#,
            self.board,
            self.current_player.label()
        )?;
        match self.winner {
            Winner::Blank => f.write_str("null")?,
            winner => write!(f, r#""{}""#, winner.label())?,
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Game, Player, Position};

    #[test]
    fn test_empty_board_render() {
        let view = GameView::project(&Game::new());
        let cells = (0..9)
            .map(|i| {
                format!(
                    r#"{{"text":"","playable":true,"x":{},"y":{}}}"#,
                    i % 3,
                    i / 3
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        let expected = format!(
            r#"{{"cells":[{}],"currentPlayer":"X","winner":"-1"}}"#,
            cells
        );
        assert_eq!(view.render(), expected);
    }

    #[test]
    fn test_blank_winner_renders_null() {
        let mut game = Game::new();
        game.place(Position::Center, Player::X);
        let projected = GameView::project(&game);
        let view = GameView::new(
            projected.board().clone(),
            projected.current_player(),
            Winner::Blank,
        );
        assert!(view.render().ends_with(r#""currentPlayer":"O","winner":null}"#));
        assert_eq!(view.summary(), "Current player: O\nWinner: ");
    }
}
