use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "sprite-extractor <IMAGE_FILE> <CSV_FILE> | sprite-extractor --rows <R> --columns <C> --file <PATH>";

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("{message}\nUsage: {usage}", usage = USAGE)]
    Usage { message: String },

    #[error("Missing required option '{0}' for grid mode\nUsage: {usage}", usage = USAGE)]
    MissingOption(&'static str),

    #[error("Sprite sheet does not exist: {0}")]
    SheetNotFound(PathBuf),

    #[error("Failed to load image '{path}'")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Cannot derive an output directory from sheet path '{0}'")]
    InvalidSheetName(PathBuf),

    #[error("Failed to read CSV file '{path}'")]
    CsvRead { path: PathBuf, source: csv::Error },

    #[error("Invalid row in CSV file '{path}'")]
    CsvParse { path: PathBuf, source: csv::Error },

    #[error("Grid must have at least one row and one column (got {rows} rows, {columns} columns)")]
    ZeroGrid { rows: u32, columns: u32 },

    #[error("Sprite '{filename}' has an empty region ({width}x{height})")]
    EmptyRect {
        filename: String,
        width: u32,
        height: u32,
    },

    #[error("Failed to create output directory '{path}'")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode sprite '{path}'")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}'")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_is_not_repeated_in_chain() {
        let err = ExtractError::OutputWrite {
            path: PathBuf::from("out/a.png"),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(err.to_string(), "Failed to write output file 'out/a.png'");

        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain.matches("disk full").count(), 1);
        assert!(chain.ends_with(": disk full"));
    }
}
