//! Crop materialization and manifest records.

use std::path::PathBuf;

use image::DynamicImage;

use super::scanner::CapturedWindow;
use crate::config::LabelMode;
use crate::constants::crop::{COUNTER_WIDTH, CROP_INFIX, MULTI_LABEL, SINGLE_LABEL};
use crate::error::{Error, Result};
use crate::output::{ManifestRecord, ManifestSink};

/// Caption strings for one and several birds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Caption when exactly one bird counts.
    pub single: String,
    /// Caption otherwise.
    pub multi: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            single: SINGLE_LABEL.to_string(),
            multi: MULTI_LABEL.to_string(),
        }
    }
}

impl Labels {
    /// Caption for `count` birds.
    #[must_use]
    pub fn for_count(&self, count: usize) -> &str {
        if count == 1 { &self.single } else { &self.multi }
    }
}

/// Writes crops into an output directory and records them in a manifest.
#[derive(Debug, Clone)]
pub struct CropEmitter {
    output_dir: PathBuf,
    labels: Labels,
    mode: LabelMode,
}

impl CropEmitter {
    /// Create an emitter writing into `output_dir`.
    #[must_use]
    pub fn new(output_dir: PathBuf, labels: Labels, mode: LabelMode) -> Self {
        Self {
            output_dir,
            labels,
            mode,
        }
    }

    /// Caption for a crop, given the image's qualifying-box count.
    #[must_use]
    pub fn caption(&self, captured: &CapturedWindow, qualifying: usize) -> &str {
        match self.mode {
            LabelMode::PerImage => self.labels.for_count(qualifying),
            LabelMode::PerCrop => self.labels.for_count(captured.captured),
        }
    }

    /// Crop `captured.window` out of `image` exactly, write it as
    /// `{stem}_crop_{counter:03}.{ext}` and append its manifest record.
    ///
    /// The record is only appended once the crop file is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the crop cannot be encoded or written, or if the
    /// manifest append fails.
    #[allow(clippy::too_many_arguments)]
    pub fn emit<S: ManifestSink>(
        &self,
        image: &DynamicImage,
        stem: &str,
        ext: &str,
        captured: &CapturedWindow,
        counter: usize,
        qualifying: usize,
        sink: &mut S,
    ) -> Result<ManifestRecord> {
        let window = captured.window;
        let crop = image.crop_imm(window.x, window.y, window.size, window.size);

        let file_name = crop_file_name(stem, counter, ext);
        let path = self.output_dir.join(&file_name);
        crop.save(&path).map_err(|e| Error::ImageWrite {
            path: path.clone(),
            source: e,
        })?;

        let record = ManifestRecord {
            file_name,
            text: self.caption(captured, qualifying).to_string(),
        };
        sink.append(&record)?;

        Ok(record)
    }
}

/// File name of the `counter`-th crop of the image with stem `stem`.
///
/// Format: `{stem}_crop_{counter:03}.{ext}`
#[must_use]
pub fn crop_file_name(stem: &str, counter: usize, ext: &str) -> String {
    format!(
        "{stem}{CROP_INFIX}{counter:0width$}.{ext}",
        width = COUNTER_WIDTH
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cropper::Window;
    use image::{GenericImageView, Rgb, RgbImage};
    use tempfile::TempDir;

    fn captured(x: u32, y: u32, size: u32, count: usize) -> CapturedWindow {
        CapturedWindow {
            window: Window { x, y, size },
            captured: count,
        }
    }

    #[test]
    fn test_crop_file_name() {
        assert_eq!(crop_file_name("IMG_7", 0, "jpg"), "IMG_7_crop_000.jpg");
        assert_eq!(crop_file_name("a", 42, "png"), "a_crop_042.png");
        assert_eq!(crop_file_name("a", 1234, "png"), "a_crop_1234.png");
    }

    #[test]
    fn test_labels_for_count() {
        let labels = Labels::default();
        assert_eq!(labels.for_count(1), "flying bird");
        assert_eq!(labels.for_count(2), "flying birds");
        assert_eq!(labels.for_count(0), "flying birds");
    }

    #[test]
    fn test_caption_per_image_ignores_crop_contents() {
        let emitter = CropEmitter::new(PathBuf::new(), Labels::default(), LabelMode::PerImage);
        assert_eq!(emitter.caption(&captured(0, 0, 8, 1), 2), "flying birds");
        assert_eq!(emitter.caption(&captured(0, 0, 8, 1), 1), "flying bird");
    }

    #[test]
    fn test_caption_per_crop_counts_captured_boxes() {
        let emitter = CropEmitter::new(PathBuf::new(), Labels::default(), LabelMode::PerCrop);
        assert_eq!(emitter.caption(&captured(0, 0, 8, 1), 5), "flying bird");
        assert_eq!(emitter.caption(&captured(0, 0, 8, 3), 5), "flying birds");
    }

    #[test]
    fn test_emit_writes_exact_crop_and_record() {
        let dir = TempDir::new().unwrap();
        let mut source = RgbImage::new(20, 20);
        source.put_pixel(10, 10, Rgb([255, 0, 0]));
        let image = DynamicImage::ImageRgb8(source);

        let emitter = CropEmitter::new(
            dir.path().to_path_buf(),
            Labels::default(),
            LabelMode::PerImage,
        );
        let mut sink: Vec<ManifestRecord> = Vec::new();
        let record = emitter
            .emit(&image, "src", "png", &captured(10, 10, 8, 1), 0, 1, &mut sink)
            .unwrap();

        assert_eq!(record.file_name, "src_crop_000.png");
        assert_eq!(record.text, "flying bird");
        assert_eq!(sink, vec![record]);

        let written = image::open(dir.path().join("src_crop_000.png")).unwrap();
        assert_eq!(written.dimensions(), (8, 8));
        assert_eq!(written.to_rgb8().get_pixel(0, 0), &Rgb([255, 0, 0]));
    }
}
