mod artifact;
mod cell;
mod label;
mod view;

pub use artifact::{
    ArtifactError, DEFAULT_ARTIFACT_PATH, project_and_record, record, write_artifact,
};
pub use cell::{BoardSnapshot, Cell};
pub use label::{Label, Turn, Winner};
pub use view::GameView;
