use anyhow::Result;
use log::debug;

use crate::job::Job;
use crate::layout::{GridLayout, SpriteSource, read_csv_entries};
use crate::output::{create_output_dir, extract_sprites};
use crate::report::Reporter;
use crate::sheet::load_sheet;

/// Run one extraction job: load the sheet, resolve the sprite entries,
/// then crop and write each one in order.
///
/// All entries are resolved before the output directory is created, so
/// argument, CSV and grid errors never leave files behind.
pub fn run(job: &Job, reporter: &mut dyn Reporter) -> Result<usize> {
    reporter.started();

    let sheet = load_sheet(&job.sheet)?;

    let entries = match &job.source {
        SpriteSource::Csv(path) => read_csv_entries(path)?,
        SpriteSource::Grid { rows, columns } => {
            let grid = GridLayout::new(sheet.width(), sheet.height(), *rows, *columns)?;
            reporter.grid_computed(&grid);
            grid.entries()?
        }
    };

    debug!("Writing {} sprites to {}", entries.len(), job.output_dir.display());
    create_output_dir(&job.output_dir)?;

    let written = extract_sprites(
        &sheet,
        &entries,
        &job.output_dir,
        job.compress,
        reporter,
    )?;

    reporter.finished(written);

    Ok(written)
}
