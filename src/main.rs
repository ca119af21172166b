use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use sprite_extractor::config::LoadedConfig;
use sprite_extractor::{CliArgs, Job, LogReporter, pipeline};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    let loaded_config = match &cli.config {
        Some(path) => Some(
            LoadedConfig::load(path)
                .with_context(|| format!("failed to load config: {}", path.display()))?,
        ),
        None => None,
    };

    let job = Job::resolve(&cli, loaded_config.as_ref())?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .format_level(false)
        .target(env_logger::Target::Stdout)
        .init();

    debug!("sprite-extractor v{}", env!("CARGO_PKG_VERSION"));
    debug!("{:?}", job);

    pipeline::run(&job, &mut LogReporter)?;

    Ok(())
}
