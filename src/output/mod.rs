mod extract;
mod format;

pub use extract::{create_output_dir, crop_sprite, extract_sprites};
pub use format::save_sprite_png;
