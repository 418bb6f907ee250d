//! Splitting a dataset into roughly equal parts.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::list_files_sorted;
use crate::constants::partition::PART_DIR_PREFIX;
use crate::error::{Error, Result};

/// Files copied into one part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartReport {
    /// Part directory (`part_k`).
    pub dir: PathBuf,
    /// Files copied into the part, summed over categories.
    pub files: usize,
}

/// Half-open index ranges of `num_parts` consecutive slices of `total` items.
///
/// Each part gets `total / num_parts` items, and the first
/// `total % num_parts` parts get one extra.
#[must_use]
pub fn part_ranges(total: usize, num_parts: usize) -> Vec<std::ops::Range<usize>> {
    if num_parts == 0 {
        return Vec::new();
    }

    let base = total / num_parts;
    let remainder = total % num_parts;

    let mut start = 0;
    (0..num_parts)
        .map(|part| {
            let size = base + usize::from(part < remainder);
            let range = start..start + size;
            start += size;
            range
        })
        .collect()
}

/// Copy the files of `input_dir` into `output_dir/part_1..part_N`.
///
/// With no `categories`, the files directly in `input_dir` are split.
/// Otherwise each `input_dir/<category>` is split by the same part
/// boundaries into `part_k/<category>`, with spaces in the category name
/// replaced by underscores. Listings are sorted by file name, so files
/// sharing an index across categories land in the same part.
///
/// # Errors
///
/// Returns an error if `num_parts` is zero, a category directory is
/// missing, or a copy fails.
pub fn partition_dataset(
    input_dir: &Path,
    output_dir: &Path,
    num_parts: usize,
    categories: &[String],
) -> Result<Vec<PartReport>> {
    if num_parts == 0 {
        return Err(Error::InvalidPartCount);
    }

    // (source dir, directory name inside each part, sorted files)
    let mut groups: Vec<(PathBuf, Option<String>, Vec<PathBuf>)> = Vec::new();
    if categories.is_empty() {
        groups.push((input_dir.to_path_buf(), None, list_files_sorted(input_dir)?));
    } else {
        for category in categories {
            let dir = input_dir.join(category);
            let files = list_files_sorted(&dir)?;
            groups.push((dir, Some(category.replace(' ', "_")), files));
        }
    }

    if groups.iter().all(|(_, _, files)| files.is_empty()) {
        warn!("No files found in {}", input_dir.display());
        return Ok(Vec::new());
    }

    if let Some((_, _, first)) = groups.first()
        && groups.iter().any(|(_, _, files)| files.len() != first.len())
    {
        warn!(
            "Categories under {} have differing file counts; each is split by its own count",
            input_dir.display()
        );
    }

    let group_ranges: Vec<_> = groups
        .iter()
        .map(|(_, _, files)| part_ranges(files.len(), num_parts))
        .collect();

    let mut reports = Vec::with_capacity(num_parts);
    for part in 0..num_parts {
        let part_dir = output_dir.join(format!("{PART_DIR_PREFIX}{}", part + 1));
        let mut copied = 0;

        for ((_, subdir, files), ranges) in groups.iter().zip(&group_ranges) {
            let dest_dir = match subdir {
                Some(name) => part_dir.join(name),
                None => part_dir.clone(),
            };
            create_dir(&dest_dir)?;

            let part_files = &files[ranges[part].clone()];
            for src in part_files {
                let Some(name) = src.file_name() else {
                    continue;
                };
                let dest = dest_dir.join(name);
                std::fs::copy(src, &dest).map_err(|e| Error::FileCopy {
                    from: src.clone(),
                    to: dest.clone(),
                    source: e,
                })?;
            }

            info!(
                "Part {}/{num_parts}: copied {} files to {}",
                part + 1,
                part_files.len(),
                dest_dir.display()
            );
            copied += part_files.len();
        }

        reports.push(PartReport {
            dir: part_dir,
            files: copied,
        });
    }

    Ok(reports)
}

fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| Error::OutputDirCreateFailed {
        path: dir.to_path_buf(),
        source: e,
    })
}
