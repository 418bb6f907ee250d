//! Reconciling parallel folders after hand filtering.
//!
//! Hand filtering deletes images from one folder only. Syncing keeps the
//! files whose stem survives in every folder and moves the rest to
//! `root/<extras>/<folder>`, so nothing is deleted.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info};

use super::{list_files_sorted, stem_of};
use crate::error::{Error, Result};

/// Outcome of a folder synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Stems present in every folder.
    pub common: usize,
    /// Files moved into the extras directory.
    pub moved: usize,
}

/// Move every file whose stem is not present in all `folders` under `root`
/// into `root/extras_dir/<folder>`.
///
/// # Errors
///
/// Returns an error if `root` or any folder is missing, `extras_dir` names
/// one of the folders, or a move fails.
pub fn sync_folders(root: &Path, folders: &[String], extras_dir: &str) -> Result<SyncReport> {
    if !root.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    if folders.iter().any(|f| f == extras_dir) {
        return Err(Error::ConfigValidation {
            message: format!("extras directory '{extras_dir}' must differ from the synced folders"),
        });
    }

    let mut listings = Vec::with_capacity(folders.len());
    for folder in folders {
        listings.push((folder, list_files_sorted(&root.join(folder))?));
    }

    let common: BTreeSet<String> = listings
        .iter()
        .map(|(_, files)| files.iter().map(|f| stem_of(f)).collect::<BTreeSet<_>>())
        .reduce(|acc, stems| acc.intersection(&stems).cloned().collect())
        .unwrap_or_default();

    info!("Common files by stem: {}", common.len());

    let extras_root = root.join(extras_dir);
    let mut moved = 0;
    for (folder, files) in &listings {
        let dest_dir = extras_root.join(folder);
        std::fs::create_dir_all(&dest_dir).map_err(|e| Error::OutputDirCreateFailed {
            path: dest_dir.clone(),
            source: e,
        })?;

        for file in files {
            if common.contains(&stem_of(file)) {
                continue;
            }
            let Some(name) = file.file_name() else {
                continue;
            };
            let dest = dest_dir.join(name);
            std::fs::rename(file, &dest).map_err(|e| Error::FileMove {
                from: file.clone(),
                to: dest.clone(),
                source: e,
            })?;
            debug!("Moved {} -> {}", file.display(), dest.display());
            moved += 1;
        }
    }

    info!("Moved {moved} unmatched file(s) to {}", extras_root.display());

    Ok(SyncReport {
        common: common.len(),
        moved,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sync_missing_root() {
        let result = sync_folders(Path::new("/nonexistent/root"), &[], "extras");
        assert!(matches!(result, Err(Error::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_sync_missing_folder() {
        let root = TempDir::new().unwrap();
        std::fs::create_dir(root.path().join("images")).unwrap();
        let folders = vec!["images".to_string(), "labels".to_string()];
        let result = sync_folders(root.path(), &folders, "extras");
        assert!(matches!(result, Err(Error::DirectoryNotFound { .. })));
    }
}
