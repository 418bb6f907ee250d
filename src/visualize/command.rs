//! Visualize command execution.

use crate::cli::VisualizeArgs;
use crate::config::Config;
use crate::error::Result;

use super::visualize_dataset;

/// Execute the visualize command.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn execute(args: &VisualizeArgs, config: &Config, progress: bool) -> Result<()> {
    let thickness = args.thickness.unwrap_or(config.visualize.thickness);
    visualize_dataset(
        &args.images_dir,
        &args.labels_dir,
        &args.output_dir,
        thickness,
        progress,
    )?;
    Ok(())
}
