//! Line-delimited JSON manifest of emitted crops.
//!
//! Each line is `{"file_name": ..., "text": ...}`, the layout expected by
//! image-folder style text-to-image fine-tuning loaders.

use crate::error::{Error, Result};
use crate::output::ManifestSink;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// One manifest line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// Crop file name, relative to the output directory.
    pub file_name: String,
    /// Caption text for the crop.
    pub text: String,
}

/// Append-only manifest file writer.
pub struct ManifestWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    written: usize,
}

impl ManifestWriter {
    /// Open the manifest at `path` for appending, creating it if needed.
    ///
    /// With `truncate`, existing contents are discarded first.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open(path: &Path, truncate: bool) -> Result<Self> {
        let mut options = OpenOptions::new();
        options.create(true);
        if truncate {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }

        let file = options.open(path).map_err(|e| Error::ManifestWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            written: 0,
        })
    }

    /// Path of the manifest file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records appended through this writer.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }
}

impl ManifestSink for ManifestWriter {
    fn append(&mut self, record: &ManifestRecord) -> Result<()> {
        let line =
            serde_json::to_string(record).map_err(|e| Error::ManifestSerialize { source: e })?;
        writeln!(self.writer, "{line}").map_err(|e| Error::ManifestWrite {
            path: self.path.clone(),
            source: e,
        })?;
        self.written += 1;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| Error::ManifestWrite {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(name: &str, text: &str) -> ManifestRecord {
        ManifestRecord {
            file_name: name.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_writes_one_json_object_per_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metadata.jsonl");

        let mut writer = ManifestWriter::open(&path, false).unwrap();
        writer.append(&record("a_crop_000.jpg", "flying bird")).unwrap();
        writer.append(&record("a_crop_001.jpg", "flying birds")).unwrap();
        writer.finalize().unwrap();
        assert_eq!(writer.written(), 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"file_name":"a_crop_000.jpg","text":"flying bird"}"#,
                r#"{"file_name":"a_crop_001.jpg","text":"flying birds"}"#,
            ]
        );
    }

    #[test]
    fn test_appends_across_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metadata.jsonl");

        for _ in 0..2 {
            let mut writer = ManifestWriter::open(&path, false).unwrap();
            writer.append(&record("x.png", "flying bird")).unwrap();
            writer.finalize().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_truncate_discards_previous_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metadata.jsonl");
        std::fs::write(&path, "stale\nstale\n").unwrap();

        let mut writer = ManifestWriter::open(&path, true).unwrap();
        writer.append(&record("x.png", "flying bird")).unwrap();
        writer.finalize().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(!contents.contains("stale"));
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metadata.jsonl");

        let mut writer = ManifestWriter::open(&path, false).unwrap();
        writer.append(&record("птица_crop_000.jpg", "flying bird")).unwrap();
        writer.finalize().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("птица_crop_000.jpg"));
    }
}
