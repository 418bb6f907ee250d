//! CLI for dataset maintenance subcommands.

use std::path::PathBuf;

use clap::Args;

use super::validators::parse_count;

/// Arguments for the partition subcommand.
#[derive(Debug, Args)]
pub struct PartitionArgs {
    /// Directory to split (or parent of the category directories).
    pub input_dir: PathBuf,

    /// Directory receiving `part_1` .. `part_N`.
    pub output_dir: PathBuf,

    /// Number of parts.
    #[arg(short, long, value_parser = parse_count)]
    pub num_parts: Option<usize>,

    /// Category subdirectory split in parallel (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,
}

/// Arguments for the sync subcommand.
#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Root directory containing the folders to synchronize.
    pub root: PathBuf,

    /// Folder to synchronize (repeatable).
    #[arg(long = "folder")]
    pub folders: Vec<String>,

    /// Name of the directory receiving unmatched files.
    #[arg(long)]
    pub extras_dir: Option<String>,
}

/// Arguments for the rename subcommand.
#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Directory whose files are renamed.
    pub dir: PathBuf,

    /// New file name prefix.
    #[arg(short, long)]
    pub prefix: String,

    /// First index.
    #[arg(long)]
    pub start: Option<usize>,

    /// Zero-padding width of the index.
    #[arg(long)]
    pub padding: Option<usize>,
}

/// Arguments for the visualize subcommand.
#[derive(Debug, Args)]
pub struct VisualizeArgs {
    /// Directory with input images.
    #[arg(long)]
    pub images_dir: PathBuf,

    /// Directory with YOLO label files.
    #[arg(long)]
    pub labels_dir: PathBuf,

    /// Directory for images with drawn boxes.
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Rectangle thickness in pixels.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub thickness: Option<u32>,
}
