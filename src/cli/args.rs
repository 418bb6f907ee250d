//! CLI argument definitions.

use clap::{Parser, Subcommand};

use super::crop::CropArgs;
use super::dataset::{PartitionArgs, RenameArgs, SyncArgs, VisualizeArgs};

/// Prepare auto-labeled bird image datasets for diffusion fine-tuning.
#[derive(Debug, Parser)]
#[command(name = "birdprep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable progress bars.
    #[arg(long, global = true)]
    pub no_progress: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Cut fixed-size crops around annotated birds and write metadata.jsonl.
    Crop(CropArgs),
    /// Split a directory (or parallel category directories) into N parts.
    Partition(PartitionArgs),
    /// Keep only files whose stem is present in every folder; move the rest aside.
    Sync(SyncArgs),
    /// Rename files to `<prefix>_<index>` in sorted order.
    Rename(RenameArgs),
    /// Draw annotation boxes onto copies of the images.
    Visualize(VisualizeArgs),
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}
