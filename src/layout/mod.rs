mod csv_source;
mod entry;
mod grid;
mod rect;

pub use csv_source::read_csv_entries;
pub use entry::{CSV_OUTPUT_DIR, SpriteEntry, SpriteSource};
pub use grid::GridLayout;
pub use rect::Rect;
