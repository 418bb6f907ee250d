//! Dataset maintenance: listing, partitioning, syncing and renaming.

pub mod command;
mod listing;
mod partition;
mod rename;
mod sync;

pub use listing::{is_image_file, list_files_sorted, open_image, stem_of};
pub use partition::{PartReport, part_ranges, partition_dataset};
pub use rename::{rename_files, renamed_file_name};
pub use sync::{SyncReport, sync_folders};
