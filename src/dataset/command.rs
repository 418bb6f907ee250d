//! Dataset maintenance command execution.

use tracing::info;

use super::{partition_dataset, rename_files, sync_folders};
use crate::cli::{PartitionArgs, RenameArgs, SyncArgs};
use crate::config::Config;
use crate::error::Result;

/// Execute the partition command.
///
/// # Errors
///
/// Returns an error if partitioning fails.
pub fn execute_partition(args: &PartitionArgs, config: &Config) -> Result<()> {
    let num_parts = args.num_parts.unwrap_or(config.partition.num_parts);
    let categories = if args.categories.is_empty() {
        &config.partition.categories
    } else {
        &args.categories
    };

    let reports = partition_dataset(&args.input_dir, &args.output_dir, num_parts, categories)?;
    let total: usize = reports.iter().map(|r| r.files).sum();
    info!(
        "Copied {total} files into {} parts under {}",
        reports.len(),
        args.output_dir.display()
    );
    Ok(())
}

/// Execute the sync command.
///
/// # Errors
///
/// Returns an error if synchronization fails.
pub fn execute_sync(args: &SyncArgs, config: &Config) -> Result<()> {
    let folders = if args.folders.is_empty() {
        &config.sync.folders
    } else {
        &args.folders
    };
    let extras_dir = args
        .extras_dir
        .as_deref()
        .unwrap_or(&config.sync.extras_dir);

    let report = sync_folders(&args.root, folders, extras_dir)?;
    info!(
        "Sync complete: {} common stems, {} file(s) moved",
        report.common, report.moved
    );
    Ok(())
}

/// Execute the rename command.
///
/// # Errors
///
/// Returns an error if renaming fails.
pub fn execute_rename(args: &RenameArgs, config: &Config) -> Result<()> {
    let start = args.start.unwrap_or(config.rename.start_index);
    let padding = args.padding.unwrap_or(config.rename.padding);

    let renamed = rename_files(&args.dir, &args.prefix, start, padding)?;
    info!("Renamed {} file(s) in {}", renamed.len(), args.dir.display());
    Ok(())
}
