//! Error types shared by the session and the viewer.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Main error type for tonelab operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to decode an image file. The session treats this as fatal.
    #[error("error loading image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to read a panel manifest from disk.
    #[error("failed to read panel manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A panel manifest did not hold valid JSON.
    #[error("invalid panel manifest {path}: {source}")]
    ManifestFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The comparison viewer process could not be started.
    #[error("failed to launch the comparison viewer: {source}")]
    ViewerLaunch {
        #[source]
        source: std::io::Error,
    },

    /// The comparison viewer process failed.
    #[error("the comparison viewer exited with {status}")]
    ViewerExit { status: ExitStatus },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tonelab operations.
pub type Result<T> = std::result::Result<T, Error>;
