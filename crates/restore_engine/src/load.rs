use std::fs;
use std::io;
use std::path::Path;

use restore_core::{is_image_media_type, ImageAsset, MAX_UPLOAD_BYTES};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("not an image file: {path} ({media_type})")]
    NotAnImage { path: String, media_type: String },
    #[error("file too large: {path} ({size} bytes, max {max})")]
    TooLarge { path: String, size: u64, max: u64 },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Reads a local file into an [`ImageAsset`], typing it by extension.
///
/// Files over the upload limit are rejected from their metadata, before any
/// content is read.
pub fn load_image_file(path: &Path) -> Result<ImageAsset, LoadError> {
    let media_type = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream");
    if !is_image_media_type(media_type) {
        return Err(LoadError::NotAnImage {
            path: path.display().to_string(),
            media_type: media_type.to_string(),
        });
    }
    let size = fs::metadata(path)?.len();
    if size > MAX_UPLOAD_BYTES {
        return Err(LoadError::TooLarge {
            path: path.display().to_string(),
            size,
            max: MAX_UPLOAD_BYTES,
        });
    }
    let bytes = fs::read(path)?;
    Ok(ImageAsset::new(bytes, media_type))
}
