use std::path::PathBuf;

/// Everything that can go wrong while rendering or saving a view.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("no mount with id '{id}' exists in the document")]
    MissingMount { id: String },

    #[error("could not write page to {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
