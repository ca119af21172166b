use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::{CompressConfig, ExtractConfig};
use crate::cli::CompressionLevel;

/// A loaded configuration file with its associated directory.
///
/// Paths in the config are relative to the config file location,
/// so we need to track where the config was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: ExtractConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: ExtractConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Resolve a config-relative path against the config file directory.
    pub fn resolve_path(&self, relative: &str) -> PathBuf {
        self.config_dir.join(relative)
    }

    pub fn sheet(&self) -> Option<PathBuf> {
        self.config.sheet.as_deref().map(|p| self.resolve_path(p))
    }

    pub fn csv(&self) -> Option<PathBuf> {
        self.config.csv.as_deref().map(|p| self.resolve_path(p))
    }

    pub fn output_dir(&self) -> Option<PathBuf> {
        self.config.output_dir.as_deref().map(|p| self.resolve_path(p))
    }

    /// Compression level from the config, if any.
    pub fn compression(&self) -> Result<Option<CompressionLevel>> {
        match &self.config.compress {
            None => Ok(None),
            Some(CompressConfig::Level(n)) => CompressionLevel::from_level(*n)
                .map(Some)
                .map_err(anyhow::Error::msg),
            Some(CompressConfig::Max(s)) if s.eq_ignore_ascii_case("max") => {
                Ok(Some(CompressionLevel::Max))
            }
            Some(CompressConfig::Max(s)) => Err(anyhow::anyhow!(
                "unknown compress value '{}' in config file. Valid values: 0-6, \"max\"",
                s
            )),
        }
    }
}
