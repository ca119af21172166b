use std::path::{Path, PathBuf};

use anyhow::Result;

use super::Rect;
use crate::error::ExtractError;

/// Directory used for CSV-mode output when no override is given
pub const CSV_OUTPUT_DIR: &str = "out";

/// A crop region paired with the file it is written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteEntry {
    rect: Rect,
    filename: String,
}

impl SpriteEntry {
    /// Create an entry, rejecting regions with zero width or height
    pub fn new(rect: Rect, filename: impl Into<String>) -> Result<Self> {
        let filename = filename.into();
        if rect.is_empty() {
            return Err(ExtractError::EmptyRect {
                filename,
                width: rect.width,
                height: rect.height,
            }
            .into());
        }
        Ok(Self { rect, filename })
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Destination filename, relative to the output directory
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

/// Where the crop regions of a run come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteSource {
    /// Explicit rectangles listed in a CSV file
    Csv(PathBuf),
    /// Equal cells from dividing the sheet into rows and columns
    Grid { rows: u32, columns: u32 },
}

impl SpriteSource {
    /// Output directory used when none is configured.
    ///
    /// CSV mode writes to `out`; grid mode writes to a directory named after
    /// the sheet file without its extension. Both are relative to the
    /// working directory.
    pub fn default_output_dir(&self, sheet: &Path) -> Result<PathBuf> {
        match self {
            SpriteSource::Csv(_) => Ok(PathBuf::from(CSV_OUTPUT_DIR)),
            SpriteSource::Grid { .. } => sheet
                .file_stem()
                .map(PathBuf::from)
                .ok_or_else(|| ExtractError::InvalidSheetName(sheet.to_path_buf()).into()),
        }
    }
}
