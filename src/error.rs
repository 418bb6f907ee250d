//! Error types for birdprep.

use std::path::PathBuf;

/// Result type alias for birdprep operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for birdprep.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Crop size must be a positive pixel count.
    #[error("crop size must be at least 1 pixel, got {value}")]
    InvalidCropSize {
        /// Rejected value.
        value: u32,
    },

    /// Stride must be a positive pixel count.
    #[error("stride must be at least 1 pixel, got {value}")]
    InvalidStride {
        /// Rejected value.
        value: u32,
    },

    /// Minimum box size must be a fraction in `[0, 1)`.
    #[error("minimum box size must be between 0.0 (inclusive) and 1.0 (exclusive), got {value}")]
    InvalidPercent {
        /// Rejected value.
        value: f64,
    },

    /// Required input directory is missing.
    #[error("directory not found: {path}")]
    DirectoryNotFound {
        /// Path to the missing directory.
        path: PathBuf,
    },

    /// Failed to list a directory.
    #[error("failed to list directory '{path}'")]
    DirectoryRead {
        /// Path to the directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to read an annotation file.
    #[error("failed to read annotation file '{path}'")]
    AnnotationRead {
        /// Path to the annotation file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode an image.
    #[error("failed to decode image '{path}': {source}")]
    ImageDecode {
        /// Path to the image file.
        path: PathBuf,
        /// Underlying image error.
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write an image.
    #[error("failed to write image '{path}'")]
    ImageWrite {
        /// Path to the output image.
        path: PathBuf,
        /// Underlying image error.
        #[source]
        source: image::ImageError,
    },

    /// Failed to open or write the manifest file.
    #[error("failed to write manifest '{path}'")]
    ManifestWrite {
        /// Path to the manifest file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a manifest record.
    #[error("failed to serialize manifest record")]
    ManifestSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Number of parts must be at least one.
    #[error("number of parts must be at least 1")]
    InvalidPartCount,

    /// Failed to copy a file.
    #[error("failed to copy '{from}' to '{to}'")]
    FileCopy {
        /// Source path.
        from: PathBuf,
        /// Destination path.
        to: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to move or rename a file.
    #[error("failed to move '{from}' to '{to}'")]
    FileMove {
        /// Source path.
        from: PathBuf,
        /// Destination path.
        to: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Rename target already exists as a different file.
    #[error("rename target '{target}' already exists (would overwrite while renaming '{source_path}')")]
    RenameConflict {
        /// File that would be renamed.
        source_path: PathBuf,
        /// Existing target path.
        target: PathBuf,
    },
}
