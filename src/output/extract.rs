use std::fs;
use std::path::Path;

use anyhow::Result;
use image::DynamicImage;

use super::save_sprite_png;
use crate::cli::CompressionLevel;
use crate::error::ExtractError;
use crate::layout::{Rect, SpriteEntry};
use crate::report::Reporter;

/// Create the output directory and any missing parents.
/// An existing directory is left as is.
pub fn create_output_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| ExtractError::OutputDir {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Copy the `[x, x+width) × [y, y+height)` region out of the sheet.
///
/// Regions reaching past the sheet are clamped to its bounds by
/// `image`, so such crops come out smaller than requested.
pub fn crop_sprite(sheet: &DynamicImage, rect: Rect) -> DynamicImage {
    sheet.crop_imm(rect.x, rect.y, rect.width, rect.height)
}

/// Crop and write every entry, in order, below `output_dir`.
///
/// Stops at the first failure; files already written stay on disk.
/// Returns the number of sprites written.
pub fn extract_sprites(
    sheet: &DynamicImage,
    entries: &[SpriteEntry],
    output_dir: &Path,
    compress: Option<CompressionLevel>,
    reporter: &mut dyn Reporter,
) -> Result<usize> {
    for entry in entries {
        let path = output_dir.join(entry.filename());
        reporter.extracting(entry, &path);

        let sprite = crop_sprite(sheet, entry.rect());
        save_sprite_png(&sprite, &path, compress)?;
    }

    Ok(entries.len())
}
