use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
///
/// CSV mode takes the two positionals; grid mode takes `--rows`,
/// `--columns` and `--file`. The modes cannot be mixed.
#[derive(Parser, Debug, Clone)]
#[command(name = "sprite-extractor")]
#[command(version, about = "Slice a sprite sheet into individual PNG images", long_about = None)]
pub struct CliArgs {
    /// Sprite sheet image (CSV mode)
    #[arg(value_name = "IMAGE_FILE", conflicts_with_all = ["rows", "columns", "file"])]
    pub image: Option<PathBuf>,

    /// CSV file with x, y, width, height, filename columns (CSV mode)
    #[arg(value_name = "CSV_FILE")]
    pub csv: Option<PathBuf>,

    /// Number of grid rows (grid mode)
    #[arg(short, long)]
    pub rows: Option<u32>,

    /// Number of grid columns (grid mode)
    #[arg(short, long)]
    pub columns: Option<u32>,

    /// Sprite sheet image (grid mode)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Load settings from a JSON config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory [default: out in CSV mode, sheet name in grid mode]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// True when any CSV-mode positional was given
    pub fn has_csv_mode(&self) -> bool {
        self.image.is_some() || self.csv.is_some()
    }

    /// True when any grid-mode option was given
    pub fn has_grid_mode(&self) -> bool {
        self.rows.is_some() || self.columns.is_some() || self.file.is_some()
    }
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(CompressionLevel::from_level)
        }
    }
}

impl CompressionLevel {
    pub fn from_level(n: u8) -> Result<Self, String> {
        if n <= 6 {
            Ok(CompressionLevel::Level(n))
        } else {
            Err(format!("compression level must be 0-6 or 'max', got {}", n))
        }
    }
}
