use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use image::{DynamicImage, ImageFormat};

use crate::cli::CompressionLevel;
use crate::error::ExtractError;

/// Save a sprite as PNG, optionally with compression.
///
/// An existing file at `path` is overwritten.
pub fn save_sprite_png(
    sprite: &DynamicImage,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<()> {
    // Encode to PNG in memory
    let mut png_data = Cursor::new(Vec::new());
    sprite
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| ExtractError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })?;

    let output_data = if let Some(level) = compress {
        let opts = match level {
            CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
            CompressionLevel::Max => oxipng::Options::max_compression(),
        };
        oxipng::optimize_from_memory(&png_data.into_inner(), &opts).map_err(|e| {
            ExtractError::PngCompress {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?
    } else {
        png_data.into_inner()
    };

    fs::write(path, output_data).map_err(|e| ExtractError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};
    use tempfile::TempDir;

    fn sample() -> DynamicImage {
        let mut img = RgbaImage::new(6, 4);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 40) as u8, (y * 60) as u8, 0, 255]);
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_save_plain_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.png");
        save_sprite_png(&sample(), &path, None).unwrap();

        let loaded = image::open(&path).unwrap();
        assert_eq!(loaded.dimensions(), (6, 4));
        assert_eq!(loaded.to_rgba8(), sample().to_rgba8());
    }

    #[test]
    fn test_save_compressed_png_is_lossless() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.png");
        save_sprite_png(&sample(), &path, Some(CompressionLevel::Level(2))).unwrap();

        let loaded = image::open(&path).unwrap();
        assert_eq!(loaded.to_rgba8(), sample().to_rgba8());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.png");
        fs::write(&path, b"stale").unwrap();

        save_sprite_png(&sample(), &path, None).unwrap();
        assert_eq!(image::open(&path).unwrap().dimensions(), (6, 4));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("a.png");

        let err = save_sprite_png(&sample(), &path, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::OutputWrite { .. })
        ));
    }
}
