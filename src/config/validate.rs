//! Configuration validation.

use crate::config::Config;
use crate::constants::visualize::MAX_THICKNESS;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_crop(config)?;
    validate_partition(config)?;
    validate_sync(config)?;
    validate_visualize(config)?;
    Ok(())
}

/// Check that a minimum box size is a fraction in `[0, 1)`.
pub fn validate_percent(percent: f64) -> Result<()> {
    if (0.0..1.0).contains(&percent) {
        Ok(())
    } else {
        Err(Error::InvalidPercent { value: percent })
    }
}

fn validate_crop(config: &Config) -> Result<()> {
    let crop = &config.crop;

    validate_percent(crop.percent)?;

    if crop.stride == Some(0) {
        return Err(Error::InvalidStride { value: 0 });
    }

    if crop.single_label.trim().is_empty() || crop.multi_label.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "crop labels must not be empty".to_string(),
        });
    }

    Ok(())
}

fn validate_partition(config: &Config) -> Result<()> {
    if config.partition.num_parts == 0 {
        return Err(Error::InvalidPartCount);
    }
    Ok(())
}

fn validate_sync(config: &Config) -> Result<()> {
    let sync = &config.sync;

    if sync.extras_dir.is_empty() || sync.extras_dir.contains(['/', '\\']) {
        return Err(Error::ConfigValidation {
            message: format!(
                "sync.extras_dir must be a plain directory name, got '{}'",
                sync.extras_dir
            ),
        });
    }

    if sync.folders.iter().any(|f| f == &sync.extras_dir) {
        return Err(Error::ConfigValidation {
            message: "sync.extras_dir must differ from every synced folder".to_string(),
        });
    }

    Ok(())
}

fn validate_visualize(config: &Config) -> Result<()> {
    let thickness = config.visualize.thickness;
    if thickness == 0 || thickness > MAX_THICKNESS {
        return Err(Error::ConfigValidation {
            message: format!("visualize.thickness must be between 1 and {MAX_THICKNESS}, got {thickness}"),
        });
    }
    Ok(())
}
