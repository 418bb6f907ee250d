//! Sequential renaming of dataset files.

use std::path::{Path, PathBuf};

use tracing::info;

use super::list_files_sorted;
use crate::error::{Error, Result};

/// New file name for the file at `index`.
///
/// Format: `{prefix}_{index:0padding}{ext}`, keeping the original extension
/// (including its dot) if there is one.
#[must_use]
pub fn renamed_file_name(prefix: &str, index: usize, padding: usize, original: &Path) -> String {
    let ext = original
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    format!("{prefix}_{index:0padding$}{ext}")
}

/// Rename every file in `dir` to a numbered name, in sorted order.
///
/// All targets are checked before anything is renamed, so a conflict
/// leaves the directory untouched. Files already carrying their target
/// name are left alone.
///
/// # Errors
///
/// Returns an error if `dir` cannot be listed, a target name is already
/// taken, or a rename fails.
pub fn rename_files(
    dir: &Path,
    prefix: &str,
    start_index: usize,
    padding: usize,
) -> Result<Vec<(PathBuf, PathBuf)>> {
    let files = list_files_sorted(dir)?;

    let plan: Vec<(PathBuf, PathBuf)> = files
        .iter()
        .enumerate()
        .map(|(i, src)| {
            let name = renamed_file_name(prefix, start_index + i, padding, src);
            (src.clone(), dir.join(name))
        })
        .filter(|(src, dst)| src != dst)
        .collect();

    for (src, dst) in &plan {
        if dst.exists() {
            return Err(Error::RenameConflict {
                source_path: src.clone(),
                target: dst.clone(),
            });
        }
    }

    for (src, dst) in &plan {
        std::fs::rename(src, dst).map_err(|e| Error::FileMove {
            from: src.clone(),
            to: dst.clone(),
            source: e,
        })?;
        info!("Renamed '{}' to '{}'", src.display(), dst.display());
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renamed_file_name() {
        assert_eq!(
            renamed_file_name("brown", 7, 4, Path::new("IMG_123.jpg")),
            "brown_0007.jpg"
        );
        assert_eq!(renamed_file_name("x", 12345, 4, Path::new("a.txt")), "x_12345.txt");
        assert_eq!(renamed_file_name("x", 3, 2, Path::new("README")), "x_03");
    }
}
