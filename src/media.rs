// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for gallery thumbnails and the lightbox.
//!
//! The dataset references images by URL. Remote `http(s)` entries are
//! fetched with `reqwest`; anything else is treated as a filesystem
//! path, resolved relative to the dataset document's directory.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

/// Decoded pixels plus dimensions, ready for the Iced image widget.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// A resolved image location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    Url(String),
}

/// Resolves a dataset image `url` against the dataset's base directory.
///
/// Remote URLs pass through untouched. Absolute paths are kept as-is;
/// relative paths are joined onto `base_dir` when one is known.
pub fn resolve(url: &str, base_dir: Option<&Path>) -> ImageSource {
    if url.starts_with("http://") || url.starts_with("https://") {
        return ImageSource::Url(url.to_owned());
    }

    let path = PathBuf::from(url);
    if path.is_absolute() {
        return ImageSource::Path(path);
    }

    match base_dir {
        Some(base) => ImageSource::Path(base.join(path)),
        None => ImageSource::Path(path),
    }
}

/// Loads and decodes the image at `source`.
///
/// # Errors
///
/// Returns [`Error::Io`] when a file cannot be read, [`Error::Http`]
/// when a remote fetch fails or answers with a non-success status, and
/// [`Error::Image`] when the bytes do not decode.
pub async fn load_image(source: ImageSource) -> Result<ImageData> {
    match source {
        ImageSource::Path(path) => {
            // Disk reads and decoding block; keep them off the async
            // executor.
            tokio::task::spawn_blocking(move || {
                let bytes = fs::read(&path)?;
                decode(&bytes)
            })
            .await
            .map_err(|e| Error::Io(e.to_string()))?
        }
        ImageSource::Url(url) => {
            let response = reqwest::get(&url).await?;
            let response = response.error_for_status().map_err(Error::from)?;
            let bytes = response.bytes().await?.to_vec();
            tokio::task::spawn_blocking(move || decode(&bytes))
                .await
                .map_err(|e| Error::Io(e.to_string()))?
        }
    }
}

fn decode(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Scales `(width, height)` to fit inside `(max_width, max_height)`
/// while preserving the aspect ratio. Images smaller than the box are
/// not upscaled.
pub fn fit_within(width: u32, height: u32, max_width: f32, max_height: f32) -> (f32, f32) {
    let width = width as f32;
    let height = height as f32;
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }

    let scale = (max_width / width).min(max_height / height).min(1.0);
    (width * scale, height * scale)
}
