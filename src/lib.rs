//! Birdprep - bird image dataset preparation CLI tool.
//!
//! This crate turns auto-labeled bird photos into a fine-tuning dataset:
//! it cuts fixed-size crops around annotated birds with a caption manifest,
//! and provides the partition, sync, rename and visualize steps used while
//! hand-filtering the labels.

pub mod annotation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod cropper;
pub mod dataset;
pub mod error;
pub mod output;
pub mod visualize;

use clap::Parser;
use cli::{Cli, Command, ConfigAction};
use config::{Config, config_file_path, load_default_config, save_default_config, validate_config};

pub use error::{Error, Result};

/// Main entry point for birdprep CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = load_default_config()?;
    validate_config(&config)?;

    let progress = !cli.quiet && !cli.no_progress;

    match cli.command {
        Command::Crop(args) => cropper::command::execute(&args, &config, progress),
        Command::Partition(args) => dataset::command::execute_partition(&args, &config),
        Command::Sync(args) => dataset::command::execute_sync(&args, &config),
        Command::Rename(args) => dataset::command::execute_rename(&args, &config),
        Command::Visualize(args) => visualize::command::execute(&args, &config, progress),
        Command::Config { action } => handle_config_command(action, &config),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
