//! Labels rendered for occupants, players and winners.
//!
//! Every mapping here is a total function over a closed enum: there is no
//! fallthrough branch that quietly produces a label.

use crate::games::tictactoe::{Player, Square};
use serde::{Deserialize, Serialize};

/// Short string representation of an occupant or player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// `"X"`
    X,
    /// `"O"`
    O,
    /// `""`, an unoccupied square.
    Blank,
    /// `"-1"`, the sentinel for "no value".
    Unset,
}

impl Label {
    /// Sentinel text standing in for "no value".
    pub const SENTINEL: &'static str = "-1";

    /// Text of this label.
    pub fn as_str(self) -> &'static str {
        match self {
            Label::X => "X",
            Label::O => "O",
            Label::Blank => "",
            Label::Unset => Self::SENTINEL,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Player> for Label {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Label::X,
            Player::O => Label::O,
        }
    }
}

impl From<Square> for Label {
    fn from(square: Square) -> Self {
        match square {
            Square::Empty => Label::Blank,
            Square::Occupied(player) => player.into(),
        }
    }
}

/// The player whose turn it is, with an explicit "nobody" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// X to move.
    X,
    /// O to move.
    O,
    /// No active player (finished game or an out-of-range value).
    Nobody,
}

impl Turn {
    /// Maps a raw player value: 0 is X, 1 is O, anything else is nobody.
    pub fn from_value(value: i32) -> Self {
        Player::from_value(value).into()
    }

    /// Label rendered for this turn.
    pub fn label(self) -> Label {
        match self {
            Turn::X => Label::X,
            Turn::O => Label::O,
            Turn::Nobody => Label::Unset,
        }
    }
}

impl From<Player> for Turn {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Turn::X,
            Player::O => Turn::O,
        }
    }
}

impl From<Option<Player>> for Turn {
    fn from(player: Option<Player>) -> Self {
        player.map_or(Turn::Nobody, Turn::from)
    }
}

/// Winner state of a snapshot.
///
/// `Undecided` and `Blank` are distinct: the former renders as the quoted
/// sentinel `"-1"`, the latter as an unquoted `null`. Projection never
/// produces `Blank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// A player has won.
    Player(Player),
    /// No winner yet.
    Undecided,
    /// Explicitly empty winner label.
    Blank,
}

impl Winner {
    /// Label for this winner state.
    pub fn label(self) -> Label {
        match self {
            Winner::Player(player) => player.into(),
            Winner::Undecided => Label::Unset,
            Winner::Blank => Label::Blank,
        }
    }
}

impl From<Option<Player>> for Winner {
    fn from(winner: Option<Player>) -> Self {
        winner.map_or(Winner::Undecided, Winner::Player)
    }
}
