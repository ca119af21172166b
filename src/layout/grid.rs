use anyhow::Result;

use super::{Rect, SpriteEntry};
use crate::error::ExtractError;

/// Equal-cell division of a sheet.
///
/// Cell sizes use truncating division, so when the sheet size is not a
/// multiple of the grid, the remainder strip at the right and bottom edges
/// is left out of every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: u32,
    pub columns: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl GridLayout {
    pub fn new(sheet_width: u32, sheet_height: u32, rows: u32, columns: u32) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(ExtractError::ZeroGrid { rows, columns }.into());
        }

        Ok(Self {
            rows,
            columns,
            cell_width: sheet_width / columns,
            cell_height: sheet_height / rows,
        })
    }

    /// Number of cells (rows × columns)
    pub fn count(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.columns)
    }

    /// Region of the cell at `row`, `column`
    pub fn cell(&self, row: u32, column: u32) -> Rect {
        Rect::new(
            column * self.cell_width,
            row * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Entries in row-major order, named `im_1.png`, `im_2.png`, ...
    pub fn entries(&self) -> Result<Vec<SpriteEntry>> {
        let mut entries = Vec::new();
        let mut n: u64 = 1;

        for row in 0..self.rows {
            for column in 0..self.columns {
                entries.push(SpriteEntry::new(
                    self.cell(row, column),
                    format!("im_{}.png", n),
                )?);
                n += 1;
            }
        }

        Ok(entries)
    }
}
