//! CLI argument parsing.

mod args;
mod crop;
mod dataset;
mod validators;

pub use args::{Cli, Command, ConfigAction};
pub use crop::CropArgs;
pub use dataset::{PartitionArgs, RenameArgs, SyncArgs, VisualizeArgs};
