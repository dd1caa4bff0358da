mod game;
mod position;
mod types;

pub use game::{Game, GameSource};
pub use position::Position;
pub use types::{Board, Player, Square};
