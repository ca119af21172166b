use serde::{Deserialize, Serialize};

/// PNG compression level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

/// Extraction config file structure.
///
/// All paths in the config are relative to the config file location.
/// Set `csv` for CSV mode, or `rows` and `columns` for grid mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Sprite sheet image
    pub sheet: Option<String>,
    /// CSV file with sprite rectangles
    pub csv: Option<String>,
    /// Number of grid rows
    pub rows: Option<u32>,
    /// Number of grid columns
    pub columns: Option<u32>,
    /// Output directory for sprite files
    pub output_dir: Option<String>,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            version: 1,
            sheet: None,
            csv: None,
            rows: None,
            columns: None,
            output_dir: None,
            compress: None,
        }
    }
}

impl ExtractConfig {
    /// True when the config names any grid-mode setting
    pub fn has_grid_mode(&self) -> bool {
        self.rows.is_some() || self.columns.is_some()
    }
}
