//! Tic-tac-toe board-state snapshots.
//!
//! Projects a live game into an immutable [`GameView`], renders it as a
//! structured JSON-shaped string, and writes a two-line text summary.
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe model and the [`GameSource`] trait snapshots read from
//! - **Snapshot**: cell views, labels, rendering and the summary artifact
//! - **Config**: where (and whether) the artifact is written
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_snapshot::{Game, Position, SnapshotConfig, TicTacToePlayer as Player};
//!
//! let mut game = Game::new();
//! game.place(Position::Center, Player::X);
//!
//! let view = tictactoe_snapshot::project_and_record(&game, &SnapshotConfig::default());
//! assert!(view.render().contains(r#""currentPlayer":"O""#));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod snapshot;

// Crate-level exports - Configuration
pub use config::{ConfigError, SnapshotConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{Board, Game, GameSource, Position, Square, Player as TicTacToePlayer};

// Crate-level exports - Snapshots
pub use snapshot::{
    ArtifactError, BoardSnapshot, Cell, DEFAULT_ARTIFACT_PATH, GameView, Label, Turn, Winner,
    project_and_record, record, write_artifact,
};
