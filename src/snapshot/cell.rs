//! Per-position cell views and the 9-cell board snapshot.

use super::label::Label;
use crate::games::tictactoe::{GameSource, Position, Square};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// One board position as seen in a snapshot.
///
/// Playability is derived from the square, so a cell can never be empty
/// and unplayable at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    position: Position,
    square: Square,
}

impl Cell {
    /// Creates the view of `square` sitting at `position`.
    pub fn new(position: Position, square: Square) -> Self {
        Self { position, square }
    }

    /// Column (0-2).
    pub fn x(&self) -> u8 {
        self.position.x()
    }

    /// Row (0-2).
    pub fn y(&self) -> u8 {
        self.position.y()
    }

    /// Board position of this cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Occupant of this cell.
    pub fn square(&self) -> Square {
        self.square
    }

    /// Occupant label: `"X"`, `"O"` or `""`.
    pub fn text(&self) -> Label {
        self.square.into()
    }

    /// True iff the cell is unoccupied.
    pub fn playable(&self) -> bool {
        self.square == Square::Empty
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Cell", 4)?;
        state.serialize_field("text", self.text().as_str())?;
        state.serialize_field("playable", &self.playable())?;
        state.serialize_field("x", &self.x())?;
        state.serialize_field("y", &self.y())?;
        state.end()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{{"text":"{}","playable":{},"x":{},"y":{}}}"#,
            self.text(),
            self.playable(),
            self.x(),
            self.y()
        )
    }
}

/// All 9 cells of a board, stored at index `3 * y + x`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BoardSnapshot {
    cells: [Cell; 9],
}

impl BoardSnapshot {
    /// Reads every square of `game` into a cell.
    pub fn capture(game: &impl GameSource) -> Self {
        let cells = std::array::from_fn(|index| {
            let position = Position::ALL[index];
            Cell::new(position, game.square(position))
        });
        Self { cells }
    }

    /// Cells in index order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Cell at `position`.
    pub fn get(&self, position: Position) -> &Cell {
        &self.cells[position.to_index()]
    }

    /// Iterates cells in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Positions that can still be played.
    pub fn playable_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.playable())
            .map(Cell::position)
            .collect()
    }
}

impl<'a> IntoIterator for &'a BoardSnapshot {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", cell)?;
        }
        f.write_str("]")
    }
}
