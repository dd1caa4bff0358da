//! Text summary artifact written alongside a projection.

use super::view::GameView;
use crate::config::SnapshotConfig;
use crate::games::tictactoe::GameSource;
use derive_more::{Display, Error};
use std::path::Path;
use tracing::{debug, error, info, instrument};

/// Default location of the summary artifact, relative to the working directory.
pub const DEFAULT_ARTIFACT_PATH: &str = "gamestate.txt";

/// Failure to write the summary artifact.
#[derive(Debug, Clone, Display, Error)]
#[display("Artifact error: {} ({}) at {}:{}", message, path, file, line)]
pub struct ArtifactError {
    /// Error message.
    pub message: String,
    /// Artifact path that was being written.
    pub path: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ArtifactError {
    /// Creates a new artifact error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message, path))]
    pub fn new(message: impl Into<String>, path: &Path) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            path: path.display().to_string(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Wraps an I/O failure on `path`.
    #[track_caller]
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err), path)
    }
}

/// Writes the two-line summary of `view` to `path`, replacing any previous
/// contents.
///
/// # Errors
///
/// Returns [`ArtifactError`] if the file cannot be created or written.
#[instrument(skip(path, view), fields(path = %path.as_ref().display()))]
pub fn write_artifact(path: impl AsRef<Path>, view: &GameView) -> Result<(), ArtifactError> {
    let path = path.as_ref();
    std::fs::write(path, view.summary()).map_err(|e| ArtifactError::io(path, e))?;
    info!(path = %path.display(), "File created successfully");
    Ok(())
}

/// Writes the summary artifact, reporting failures instead of returning them.
#[instrument(skip(path, view), fields(path = %path.as_ref().display()))]
pub fn record(path: impl AsRef<Path>, view: &GameView) {
    let path = path.as_ref();
    if let Err(e) = write_artifact(path, view) {
        error!(error = %e, path = %path.display(), "Error creating the file");
    }
}

/// Projects `game` and records its summary as configured.
///
/// Always returns the view, whether or not the artifact could be written.
#[instrument(skip(game, config), fields(path = %config.artifact_path().display()))]
pub fn project_and_record(game: &impl GameSource, config: &SnapshotConfig) -> GameView {
    let view = GameView::project(game);
    if *config.record_artifact() {
        record(config.artifact_path(), &view);
    } else {
        debug!("Artifact recording disabled");
    }
    view
}
