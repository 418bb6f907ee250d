//! CLI for the crop extraction subcommand.

use std::path::PathBuf;

use clap::Args;

use super::validators::{parse_percent, parse_pixels};
use crate::config::LabelMode;

/// Arguments for the crop subcommand.
#[derive(Debug, Args)]
pub struct CropArgs {
    /// Directory with input images (flat, or with train/val/test subdirectories).
    #[arg(long)]
    pub images_dir: PathBuf,

    /// Directory with YOLO label files.
    #[arg(long)]
    pub labels_dir: PathBuf,

    /// Directory to save cropped images and metadata.jsonl.
    #[arg(short, long, env = "BIRDPREP_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Size of the square crop window in pixels.
    #[arg(long, value_parser = parse_pixels)]
    pub crop_size: u32,

    /// Minimum normalized width/height for a bird to qualify.
    #[arg(long, value_parser = parse_percent, env = "BIRDPREP_PERCENT")]
    pub percent: Option<f64>,

    /// Stride for the sliding window (defaults to crop size).
    #[arg(long, value_parser = parse_pixels)]
    pub stride: Option<u32>,

    /// Annotation class id that qualifies.
    #[arg(long)]
    pub class_id: Option<u32>,

    /// How captions are chosen for each crop.
    #[arg(long, value_enum)]
    pub label_mode: Option<LabelMode>,

    /// Caption for a single bird.
    #[arg(long)]
    pub single_label: Option<String>,

    /// Caption for several birds.
    #[arg(long)]
    pub multi_label: Option<String>,

    /// Truncate metadata.jsonl instead of appending to it.
    #[arg(long)]
    pub fresh: bool,
}
