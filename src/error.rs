use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacerError {
    #[error("package type '{type_name}' is not supported")]
    UnsupportedType { type_name: String },

    #[error("family '{family}' does not recognize location '{location}'")]
    UnrecognizedLocation { family: String, location: String },

    #[error("package is not installed: {package}")]
    NotInstalled { package: String },

    #[error("failed to place artifact at '{path}': {cause}")]
    PlacementFailed { path: PathBuf, cause: anyhow::Error },

    #[error("failed to delete '{path}'")]
    DeletionFailed { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, PlacerError>;
