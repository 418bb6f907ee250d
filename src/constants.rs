//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "birdprep";

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Supported image extensions (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Extension of YOLO annotation files paired with images.
pub const LABEL_EXTENSION: &str = "txt";

/// Crop extraction constants.
pub mod crop {
    /// Default minimum normalized width and height of a qualifying box.
    pub const DEFAULT_PERCENT: f64 = 0.015;

    /// Class id of birds in auto-labeled annotation files.
    pub const BIRD_CLASS_ID: u32 = 0;

    /// Default output directory for crops and the manifest.
    pub const DEFAULT_OUTPUT_DIR: &str = "./dataset_for_finetuning";

    /// File name of the line-delimited JSON manifest.
    pub const MANIFEST_FILE_NAME: &str = "metadata.jsonl";

    /// Infix between the source stem and the crop counter.
    pub const CROP_INFIX: &str = "_crop_";

    /// Zero-padding width of the per-image crop counter.
    pub const COUNTER_WIDTH: usize = 3;

    /// Manifest text for exactly one bird.
    pub const SINGLE_LABEL: &str = "flying bird";

    /// Manifest text for more than one bird.
    pub const MULTI_LABEL: &str = "flying birds";

    /// Fixed split subdirectories, processed in this order when present.
    pub const SPLIT_DIRS: &[&str] = &["train", "val", "test"];

    /// Number of tokens in a well-formed annotation line.
    pub const ANNOTATION_FIELDS: usize = 5;
}

/// Dataset partitioning constants.
pub mod partition {
    /// Default number of parts.
    pub const DEFAULT_NUM_PARTS: usize = 10;

    /// Prefix for part directories (`part_1`, `part_2`, ...).
    pub const PART_DIR_PREFIX: &str = "part_";
}

/// Folder synchronization constants.
pub mod sync {
    /// Default folders kept in sync after hand filtering.
    pub const DEFAULT_FOLDERS: &[&str] = &["images", "labels", "images with labels"];

    /// Default name of the directory receiving unmatched files.
    pub const DEFAULT_EXTRAS_DIR: &str = "extras";
}

/// Rename constants.
pub mod rename {
    /// Default zero-padding width for renamed indices.
    pub const DEFAULT_PADDING: usize = 4;

    /// Default first index.
    pub const DEFAULT_START_INDEX: usize = 0;
}

/// Visualization constants.
pub mod visualize {
    /// Default rectangle thickness in pixels.
    pub const DEFAULT_THICKNESS: u32 = 2;

    /// Rectangle color (RGB green).
    pub const BOX_COLOR: [u8; 3] = [0, 255, 0];

    /// Maximum allowed rectangle thickness.
    pub const MAX_THICKNESS: u32 = 64;
}
