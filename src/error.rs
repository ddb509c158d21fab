//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec, STL reader, and preset errors, and provides
//! semantic variants for missing inputs and degenerate meshes.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("STL reader error: {0}")]
    Stl(#[from] crate::io::StlError),

    #[error("Failed to replace file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Preset error: {0}")]
    Preset(#[from] serde_json::Error),

    #[error("{} not found", path.display())]
    MissingInput { path: PathBuf },

    #[error("Mesh has no vertices")]
    EmptyMesh,

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },
}

impl Error {
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Error::MissingInput { path: path.into() }
    }
}
