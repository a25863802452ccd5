//! Custom error types for inktone.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the inktone library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to fetch an image over HTTP.
    #[error("failed to fetch image from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Fetched bytes could not be decoded as an image.
    #[error("failed to decode fetched image: {source}")]
    Decode {
        #[source]
        source: image::ImageError,
    },
}

/// Result type alias for inktone operations.
pub type Result<T> = std::result::Result<T, Error>;
