//! Tests for projecting games into views.

use tictactoe_snapshot::{
    Board, Game, GameSource, GameView, Label, Position, Square, TicTacToePlayer as Player, Turn,
    Winner,
};

/// Game collaborator reporting a raw player value, as an external engine might.
struct RawGame {
    board: Board,
    player_value: i32,
    winner: Option<Player>,
}

impl GameSource for RawGame {
    fn square(&self, position: Position) -> Square {
        self.board.get(position)
    }

    fn current_player(&self) -> Turn {
        Turn::from_value(self.player_value)
    }

    fn winner(&self) -> Option<Player> {
        self.winner
    }
}

#[test]
fn test_every_position_appears_once_in_index_order() {
    let view = GameView::project(&Game::new());
    let cells = view.board().cells();
    assert_eq!(cells.len(), 9);
    for (index, cell) in cells.iter().enumerate() {
        assert_eq!(3 * cell.y() as usize + cell.x() as usize, index);
        assert_eq!(cell.position().to_index(), index);
    }
}

#[test]
fn test_playable_iff_unoccupied() {
    let mut game = Game::new();
    game.place(Position::TopLeft, Player::X);
    game.place(Position::Center, Player::O);
    game.place(Position::BottomRight, Player::X);

    let view = GameView::project(&game);
    for cell in view.board() {
        let occupied = game.board().get(cell.position()) != Square::Empty;
        assert_eq!(cell.playable(), !occupied, "cell {}", cell.position());
        assert_eq!(cell.text() == Label::Blank, !occupied);
    }
    assert_eq!(view.board().playable_positions().len(), 6);
    assert_eq!(view.board().get(Position::Center).text(), Label::O);
}

#[test]
fn test_current_player_labels() {
    let cases = [(0, "X"), (1, "O"), (2, "-1"), (-1, "-1"), (42, "-1")];
    for (value, expected) in cases {
        let game = RawGame {
            board: Board::new(),
            player_value: value,
            winner: None,
        };
        let view = GameView::project(&game);
        assert_eq!(view.current_player().label().as_str(), expected, "value {}", value);
    }
}

#[test]
fn test_absent_winner_is_undecided() {
    let view = GameView::project(&Game::new());
    assert_eq!(view.winner(), Winner::Undecided);
    assert_eq!(view.winner().label().as_str(), "-1");
}

#[test]
fn test_recorded_winner_is_projected() {
    let mut game = Game::new();
    game.set_winner(Some(Player::O));
    let view = GameView::project(&game);
    assert_eq!(view.winner(), Winner::Player(Player::O));
}

#[test]
fn test_finished_game_has_nobody_to_move() {
    let mut game = Game::new();
    game.place(Position::Center, Player::X);
    game.finish();
    let view = GameView::project(&game);
    assert_eq!(view.current_player(), Turn::Nobody);
    assert_eq!(view.current_player().label().as_str(), "-1");
}

#[test]
fn test_place_passes_turn() {
    let mut game = Game::new();
    assert_eq!(GameView::project(&game).current_player(), Turn::X);
    game.place(Position::Center, Player::X);
    assert_eq!(GameView::project(&game).current_player(), Turn::O);
}

#[test]
fn test_projection_does_not_touch_game() {
    let mut game = Game::with_board(Board::new(), Player::O);
    game.place(Position::TopRight, Player::O);
    let before = game.clone();
    let first = GameView::project(&game);
    let second = GameView::project(&game);
    assert_eq!(game, before);
    assert_eq!(first, second);
}
