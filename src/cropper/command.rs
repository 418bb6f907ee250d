//! Crop command execution.

use tracing::info;

use super::{CropOptions, Labels, run_crop};
use crate::cli::CropArgs;
use crate::config::Config;
use crate::error::Result;

/// Build run options from CLI arguments, falling back to the config file.
#[must_use]
pub fn resolve_options(args: &CropArgs, config: &Config, progress: bool) -> CropOptions {
    let defaults = &config.crop;

    CropOptions {
        images_dir: args.images_dir.clone(),
        labels_dir: args.labels_dir.clone(),
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| defaults.output_dir.clone()),
        crop_size: args.crop_size,
        stride: args.stride.or(defaults.stride),
        percent: args.percent.unwrap_or(defaults.percent),
        class_id: args.class_id.unwrap_or(defaults.class_id),
        labels: Labels {
            single: args
                .single_label
                .clone()
                .unwrap_or_else(|| defaults.single_label.clone()),
            multi: args
                .multi_label
                .clone()
                .unwrap_or_else(|| defaults.multi_label.clone()),
        },
        label_mode: args.label_mode.unwrap_or(defaults.label_mode),
        fresh: args.fresh,
        progress,
    }
}

/// Execute the crop command.
///
/// # Errors
///
/// Returns an error if the run cannot start or the manifest cannot be
/// written.
pub fn execute(args: &CropArgs, config: &Config, progress: bool) -> Result<()> {
    let options = resolve_options(args, config, progress);

    info!(
        "Cropping {} (labels: {}) with {}px windows, stride {}px, min size {}",
        options.images_dir.display(),
        options.labels_dir.display(),
        options.crop_size,
        options.stride(),
        options.percent
    );

    run_crop(&options)?;
    Ok(())
}
