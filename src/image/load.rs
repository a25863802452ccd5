//! Image loading from paths and URLs.

use std::path::Path;

use image::RgbaImage;

use crate::error::{Error, Result};

/// Load an image from a source string and convert it to RGBA8.
///
/// Sources beginning with `http://` or `https://` are fetched over the
/// network; everything else is treated as a filesystem path. The image is
/// decoded at its natural size with no resizing.
///
/// # Errors
///
/// Returns an error if the image cannot be fetched, opened, or decoded.
pub fn load_rgba(source: &str) -> Result<RgbaImage> {
    if source.starts_with("http://") || source.starts_with("https://") {
        return fetch_rgba(source);
    }

    let path = Path::new(source);
    let img = image::open(path).map_err(|err| Error::ImageLoad {
        path: path.to_path_buf(),
        source: err,
    })?;

    Ok(img.to_rgba8())
}

/// Fetch an image over HTTP and decode it from memory.
fn fetch_rgba(url: &str) -> Result<RgbaImage> {
    tracing::debug!("fetching image from {url}");

    let response = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|err| Error::Fetch {
            url: url.to_string(),
            source: err,
        })?;

    let bytes = response.bytes().map_err(|err| Error::Fetch {
        url: url.to_string(),
        source: err,
    })?;

    let img = image::load_from_memory(&bytes).map_err(|err| Error::Decode { source: err })?;

    Ok(img.to_rgba8())
}
