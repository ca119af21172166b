use std::path::Path;

use anyhow::Result;
use image::{DynamicImage, ImageReader};
use log::debug;

use crate::error::ExtractError;

/// Decode the sprite sheet at `path`.
///
/// The format is detected from the file content, falling back to the
/// extension. The image is returned as decoded, with no colour conversion.
pub fn load_sheet(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(ExtractError::SheetNotFound(path.to_path_buf()).into());
    }

    let sheet = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| ExtractError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| ExtractError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

    debug!(
        "Loaded sheet {} ({}x{}, {:?})",
        path.display(),
        sheet.width(),
        sheet.height(),
        sheet.color()
    );

    Ok(sheet)
}
