use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while preparing a slider. Runtime effects never fail;
/// missing assets degrade to blank layers instead.
#[derive(Error, Debug)]
pub enum SliderError {
    #[error("failed to read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read directory '{}': {source}", path.display())]
    ImageDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no image files found in directory '{}'", path.display())]
    NoImages { path: PathBuf },

    #[error("failed to load image '{}': {message}", path.display())]
    Image { path: PathBuf, message: String },

    #[error("failed to create render target: {0}")]
    RenderTarget(String),
}

pub type Result<T> = std::result::Result<T, SliderError>;
