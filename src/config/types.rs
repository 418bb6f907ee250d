//! Configuration type definitions.

use crate::constants::{crop, partition, rename, sync, visualize};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Crop extraction settings.
    pub crop: CropConfig,

    /// Dataset partitioning settings.
    pub partition: PartitionConfig,

    /// Folder synchronization settings.
    pub sync: SyncConfig,

    /// Rename settings.
    pub rename: RenameConfig,

    /// Visualization settings.
    pub visualize: VisualizeConfig,
}

/// How the manifest caption is chosen for each crop.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum LabelMode {
    /// Plural if the source image has more than one qualifying box,
    /// regardless of how many land in the crop.
    #[default]
    PerImage,
    /// Plural if the crop itself fully contains more than one qualifying box.
    PerCrop,
}

impl std::fmt::Display for LabelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PerImage => write!(f, "per-image"),
            Self::PerCrop => write!(f, "per-crop"),
        }
    }
}

/// Crop extraction defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Minimum normalized width and height of a qualifying box.
    pub percent: f64,

    /// Window step in pixels (unset = crop size).
    pub stride: Option<u32>,

    /// Class id that qualifies.
    pub class_id: u32,

    /// Output directory for crops and manifest.
    pub output_dir: PathBuf,

    /// Caption for a single bird.
    pub single_label: String,

    /// Caption for several birds.
    pub multi_label: String,

    /// Caption selection mode.
    pub label_mode: LabelMode,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            percent: crop::DEFAULT_PERCENT,
            stride: None,
            class_id: crop::BIRD_CLASS_ID,
            output_dir: PathBuf::from(crop::DEFAULT_OUTPUT_DIR),
            single_label: crop::SINGLE_LABEL.to_string(),
            multi_label: crop::MULTI_LABEL.to_string(),
            label_mode: LabelMode::default(),
        }
    }
}

/// Partitioning defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    /// Number of parts.
    pub num_parts: usize,

    /// Category subdirectories split in parallel (empty = flat directory).
    pub categories: Vec<String>,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            num_parts: partition::DEFAULT_NUM_PARTS,
            categories: Vec::new(),
        }
    }
}

/// Synchronization defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Folders whose file stems are intersected.
    pub folders: Vec<String>,

    /// Directory name receiving unmatched files.
    pub extras_dir: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            folders: sync::DEFAULT_FOLDERS
                .iter()
                .map(ToString::to_string)
                .collect(),
            extras_dir: sync::DEFAULT_EXTRAS_DIR.to_string(),
        }
    }
}

/// Rename defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    /// Zero-padding width of the index.
    pub padding: usize,

    /// First index.
    pub start_index: usize,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            padding: rename::DEFAULT_PADDING,
            start_index: rename::DEFAULT_START_INDEX,
        }
    }
}

/// Visualization defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizeConfig {
    /// Rectangle thickness in pixels.
    pub thickness: u32,
}

impl Default for VisualizeConfig {
    fn default() -> Self {
        Self {
            thickness: visualize::DEFAULT_THICKNESS,
        }
    }
}
