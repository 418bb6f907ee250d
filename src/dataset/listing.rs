//! Ordered directory listings.
//!
//! Every step lists a directory once, up front, and works from that
//! snapshot in file-name order. Files appearing or disappearing while a
//! step runs are not picked up.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::constants::IMAGE_EXTENSIONS;
use crate::error::{Error, Result};

/// List the regular files directly inside `dir`, sorted by file name.
///
/// # Errors
///
/// Returns an error if `dir` does not exist or cannot be read.
pub fn list_files_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let read_err = |e| Error::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Check if a file has a supported image extension.
#[must_use]
pub fn is_image_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        IMAGE_EXTENSIONS
            .iter()
            .any(|candidate| ext.eq_ignore_ascii_case(OsStr::new(candidate)))
    })
}

/// Decode the image at `path`, format chosen by its contents.
///
/// # Errors
///
/// Returns [`Error::ImageDecode`] if the file cannot be read or decoded.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| Error::ImageDecode {
        path: path.to_path_buf(),
        source: e,
    })
}

/// File stem as a string, with invalid UTF-8 replaced.
#[must_use]
pub fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
