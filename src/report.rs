//! Progress reporting for an extraction run.
//!
//! The pipeline never prints directly; it calls a [`Reporter`] at each step
//! so the crop computation can be driven and observed from tests.

use std::path::Path;

use log::info;

use crate::layout::{GridLayout, SpriteEntry};

pub trait Reporter {
    /// Run started, before the sheet is loaded
    fn started(&mut self);

    /// Grid cell size computed, before any sprite is written
    fn grid_computed(&mut self, grid: &GridLayout);

    /// Sprite about to be written to `path`
    fn extracting(&mut self, entry: &SpriteEntry, path: &Path);

    /// All `count` sprites written
    fn finished(&mut self, count: usize);
}

/// Reports progress through the `log` facade at info level
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn started(&mut self) {
        info!("Starting sprite extractor...");
    }

    fn grid_computed(&mut self, grid: &GridLayout) {
        info!(
            "Sprite size: {}x{}, extracting {} sprites",
            grid.cell_width,
            grid.cell_height,
            grid.count()
        );
    }

    fn extracting(&mut self, entry: &SpriteEntry, path: &Path) {
        info!("{} -> {}", entry.rect(), path.display());
    }

    fn finished(&mut self, _count: usize) {
        info!("Done!");
    }
}
