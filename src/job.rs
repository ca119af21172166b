use std::path::PathBuf;

use anyhow::Result;

use crate::cli::{CliArgs, CompressionLevel};
use crate::config::LoadedConfig;
use crate::error::ExtractError;
use crate::layout::SpriteSource;

/// Everything one extraction run needs, merged from CLI args and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub sheet: PathBuf,
    pub source: SpriteSource,
    pub output_dir: PathBuf,
    pub compress: Option<CompressionLevel>,
}

impl Job {
    /// Merge CLI arguments with an optional config file.
    ///
    /// A mode given on the command line replaces the config's mode entirely;
    /// for the remaining settings CLI values take precedence over config values.
    pub fn resolve(args: &CliArgs, config: Option<&LoadedConfig>) -> Result<Self> {
        let (sheet, source) = if args.has_csv_mode() {
            csv_mode(args.image.clone(), args.csv.clone())?
        } else if args.has_grid_mode() {
            grid_mode(args.file.clone(), args.rows, args.columns)?
        } else if let Some(lc) = config {
            if lc.csv().is_some() && !lc.config.has_grid_mode() {
                csv_mode(lc.sheet(), lc.csv())?
            } else if lc.config.has_grid_mode() && lc.csv().is_none() {
                grid_mode(lc.sheet(), lc.config.rows, lc.config.columns)?
            } else {
                return Err(usage("config file must set either 'csv' or 'rows' and 'columns'"));
            }
        } else {
            return Err(usage("no sprite sheet given"));
        };

        let output_dir = match args.output.clone().or_else(|| config.and_then(|lc| lc.output_dir())) {
            Some(dir) => dir,
            None => source.default_output_dir(&sheet)?,
        };

        let compress = match args.compress {
            Some(level) => Some(level),
            None => match config {
                Some(lc) => lc.compression()?,
                None => None,
            },
        };

        Ok(Self {
            sheet,
            source,
            output_dir,
            compress,
        })
    }
}

fn usage(message: &str) -> anyhow::Error {
    ExtractError::Usage {
        message: message.to_string(),
    }
    .into()
}

fn csv_mode(image: Option<PathBuf>, csv: Option<PathBuf>) -> Result<(PathBuf, SpriteSource)> {
    match (image, csv) {
        (Some(image), Some(csv)) => Ok((image, SpriteSource::Csv(csv))),
        _ => Err(usage("CSV mode needs both an image file and a CSV file")),
    }
}

fn grid_mode(
    file: Option<PathBuf>,
    rows: Option<u32>,
    columns: Option<u32>,
) -> Result<(PathBuf, SpriteSource)> {
    let file = file.ok_or(ExtractError::MissingOption("--file"))?;
    let rows = rows.ok_or(ExtractError::MissingOption("--rows"))?;
    let columns = columns.ok_or(ExtractError::MissingOption("--columns"))?;
    Ok((file, SpriteSource::Grid { rows, columns }))
}
