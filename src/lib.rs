pub mod cli;
pub mod config;
pub mod error;
pub mod job;
pub mod layout;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod sheet;

pub use cli::{CliArgs, CompressionLevel};
pub use error::ExtractError;
pub use job::Job;
pub use layout::{GridLayout, Rect, SpriteEntry, SpriteSource};
pub use report::{LogReporter, Reporter};
