//! Crop extraction over an image tree.

use std::path::{Path, PathBuf};

use image::GenericImageView;
use tracing::{debug, info, warn};

use super::emitter::{CropEmitter, Labels};
use super::scanner::captured_windows;
use crate::annotation::{NormalizedBox, PixelBox, label_path_for, read_annotations};
use crate::config::{LabelMode, validate_percent};
use crate::constants::crop::{BIRD_CLASS_ID, DEFAULT_PERCENT, MANIFEST_FILE_NAME, SPLIT_DIRS};
use crate::dataset::{is_image_file, list_files_sorted, open_image, stem_of};
use crate::error::{Error, Result};
use crate::output::{ManifestSink, ManifestWriter, progress};

/// Settings for one crop extraction run.
#[derive(Debug, Clone)]
pub struct CropOptions {
    /// Directory of source images (flat, or with `train`/`val`/`test`).
    pub images_dir: PathBuf,
    /// Directory of annotation files, flat or mirroring the splits.
    pub labels_dir: PathBuf,
    /// Directory receiving crops and `metadata.jsonl`.
    pub output_dir: PathBuf,
    /// Window side length in pixels.
    pub crop_size: u32,
    /// Window step in pixels (`None` = `crop_size`).
    pub stride: Option<u32>,
    /// Minimum normalized width and height of a qualifying box.
    pub percent: f64,
    /// Class id that qualifies.
    pub class_id: u32,
    /// Caption strings.
    pub labels: Labels,
    /// Caption selection mode.
    pub label_mode: LabelMode,
    /// Truncate the manifest instead of appending.
    pub fresh: bool,
    /// Show a progress bar.
    pub progress: bool,
}

impl CropOptions {
    /// Options with default filter, labels and stride.
    #[must_use]
    pub fn new(images_dir: PathBuf, labels_dir: PathBuf, output_dir: PathBuf, crop_size: u32) -> Self {
        Self {
            images_dir,
            labels_dir,
            output_dir,
            crop_size,
            stride: None,
            percent: DEFAULT_PERCENT,
            class_id: BIRD_CLASS_ID,
            labels: Labels::default(),
            label_mode: LabelMode::default(),
            fresh: false,
            progress: false,
        }
    }

    /// Effective window step.
    #[must_use]
    pub fn stride(&self) -> u32 {
        self.stride.unwrap_or(self.crop_size)
    }

    /// Reject settings that would make the scan meaningless.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero crop size or stride, or a percent
    /// outside `[0, 1)`.
    pub fn validate(&self) -> Result<()> {
        if self.crop_size == 0 {
            return Err(Error::InvalidCropSize { value: 0 });
        }
        if self.stride() == 0 {
            return Err(Error::InvalidStride { value: 0 });
        }
        validate_percent(self.percent)
    }
}

/// Why an image contributed no crops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No paired annotation file.
    MissingAnnotation,
    /// Annotations exist but none pass the class and size filter.
    NoQualifyingBoxes,
    /// The image could not be decoded.
    UnreadableImage,
    /// The crop size exceeds the image width or height.
    EmptyWindowRange,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAnnotation => write!(f, "no annotation file"),
            Self::NoQualifyingBoxes => write!(f, "no qualifying boxes"),
            Self::UnreadableImage => write!(f, "unreadable image"),
            Self::EmptyWindowRange => write!(f, "crop size exceeds image"),
        }
    }
}

/// Result of processing one source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOutcome {
    /// Windows were scanned; `crops` of them captured a qualifying box.
    Cropped {
        /// Number of crops written.
        crops: usize,
    },
    /// The image was skipped.
    Skipped(SkipReason),
    /// Writing a crop failed after `crops` crops (and their records) were
    /// already written; the rest of the image was abandoned.
    Failed {
        /// Number of crops written before the failure.
        crops: usize,
    },
}

/// A source image paired with its expected annotation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Image file.
    pub image_path: PathBuf,
    /// Annotation file (may not exist).
    pub label_path: PathBuf,
}

/// Totals for a crop extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CropSummary {
    /// Source images considered.
    pub images: usize,
    /// Images that produced at least one crop.
    pub cropped_images: usize,
    /// Crops written (equals manifest records appended).
    pub crops: usize,
    /// Images without an annotation file.
    pub missing_annotation: usize,
    /// Images without qualifying boxes.
    pub no_qualifying_boxes: usize,
    /// Images that failed to decode.
    pub unreadable: usize,
    /// Images smaller than the crop size.
    pub empty_window_range: usize,
    /// Images that failed for other reasons (e.g. crop write failure).
    /// Crops written before such a failure still count in `crops`.
    pub errors: usize,
}

impl CropSummary {
    fn record(&mut self, outcome: ImageOutcome) {
        match outcome {
            ImageOutcome::Cropped { crops } => {
                self.crops += crops;
                if crops > 0 {
                    self.cropped_images += 1;
                }
            }
            ImageOutcome::Skipped(SkipReason::MissingAnnotation) => self.missing_annotation += 1,
            ImageOutcome::Skipped(SkipReason::NoQualifyingBoxes) => self.no_qualifying_boxes += 1,
            ImageOutcome::Skipped(SkipReason::UnreadableImage) => self.unreadable += 1,
            ImageOutcome::Skipped(SkipReason::EmptyWindowRange) => self.empty_window_range += 1,
            ImageOutcome::Failed { crops } => {
                self.crops += crops;
                if crops > 0 {
                    self.cropped_images += 1;
                }
                self.errors += 1;
            }
        }
    }
}

/// Run crop extraction, writing crops and `metadata.jsonl` into
/// `options.output_dir`.
///
/// The manifest is opened once and appended to (truncated first with
/// `fresh`). Per-image failures are logged and skipped; only manifest
/// failures abort the run.
///
/// # Errors
///
/// Returns an error for invalid options, a missing images directory, an
/// output directory that cannot be created, or a manifest write failure.
pub fn run_crop(options: &CropOptions) -> Result<CropSummary> {
    options.validate()?;

    std::fs::create_dir_all(&options.output_dir).map_err(|e| Error::OutputDirCreateFailed {
        path: options.output_dir.clone(),
        source: e,
    })?;

    let sources = collect_sources(&options.images_dir, &options.labels_dir)?;

    let manifest_path = options.output_dir.join(MANIFEST_FILE_NAME);
    let mut manifest = ManifestWriter::open(&manifest_path, options.fresh)?;
    debug!(
        "Manifest {} ({})",
        manifest.path().display(),
        if options.fresh { "truncated" } else { "appending" }
    );

    let summary = crop_sources(&sources, options, &mut manifest)?;
    manifest.finalize()?;

    info!(
        "Wrote {} crops from {} of {} images to {} ({} manifest records)",
        summary.crops,
        summary.cropped_images,
        summary.images,
        options.output_dir.display(),
        manifest.written()
    );
    if summary.unreadable > 0 || summary.errors > 0 {
        warn!(
            "{} unreadable image(s), {} image(s) with errors",
            summary.unreadable, summary.errors
        );
    }
    debug!(
        "Skipped: {} without annotations, {} without qualifying boxes, {} smaller than crop",
        summary.missing_annotation, summary.no_qualifying_boxes, summary.empty_window_range
    );

    Ok(summary)
}

/// Crop every source in order, appending records to `sink`.
///
/// # Errors
///
/// Returns an error only if appending to `sink` fails.
pub fn crop_sources<S: ManifestSink>(
    sources: &[SourceImage],
    options: &CropOptions,
    sink: &mut S,
) -> Result<CropSummary> {
    options.validate()?;

    let emitter = CropEmitter::new(
        options.output_dir.clone(),
        options.labels.clone(),
        options.label_mode,
    );
    let pb = progress::create_image_progress(sources.len(), options.progress);

    let mut summary = CropSummary::default();
    for source in sources {
        summary.images += 1;
        if let Some(pb) = &pb {
            pb.set_message(stem_of(&source.image_path));
        }

        match process_image(source, options, &emitter, sink) {
            Ok(outcome) => summary.record(outcome),
            Err(e) if aborts_run(&e) => {
                progress::finish_progress(pb, "Failed");
                return Err(e);
            }
            Err(e) => {
                warn!("Failed to process {}: {e}", source.image_path.display());
                summary.errors += 1;
            }
        }

        progress::inc_progress(pb.as_ref());
    }

    progress::finish_progress(pb, "Complete");
    Ok(summary)
}

/// Scan one image and emit a crop for every window that fully contains a
/// qualifying box.
///
/// Crop counters start at zero for each image, so re-running overwrites
/// the same crop files. Crops keep the source extension as found. A crop
/// that cannot be written ends the image with [`ImageOutcome::Failed`].
///
/// # Errors
///
/// Returns an error if the annotation file cannot be read or a manifest
/// record cannot be written.
pub fn process_image<S: ManifestSink>(
    source: &SourceImage,
    options: &CropOptions,
    emitter: &CropEmitter,
    sink: &mut S,
) -> Result<ImageOutcome> {
    let image_path = &source.image_path;

    if !source.label_path.is_file() {
        debug!("Skipping {} (no annotation file)", image_path.display());
        return Ok(ImageOutcome::Skipped(SkipReason::MissingAnnotation));
    }

    let qualifying: Vec<NormalizedBox> = read_annotations(&source.label_path)?
        .into_iter()
        .filter(|b| b.qualifies(options.class_id, options.percent))
        .collect();

    if qualifying.is_empty() {
        debug!("Skipping {} (no qualifying boxes)", image_path.display());
        return Ok(ImageOutcome::Skipped(SkipReason::NoQualifyingBoxes));
    }

    let image = match open_image(image_path) {
        Ok(image) => image,
        Err(e) => {
            warn!("Skipping unreadable image: {e}");
            return Ok(ImageOutcome::Skipped(SkipReason::UnreadableImage));
        }
    };

    let (width, height) = image.dimensions();
    if options.crop_size > width || options.crop_size > height {
        debug!(
            "Skipping {} ({width}x{height} is smaller than crop size {})",
            image_path.display(),
            options.crop_size
        );
        return Ok(ImageOutcome::Skipped(SkipReason::EmptyWindowRange));
    }

    let pixel_boxes: Vec<PixelBox> = qualifying
        .iter()
        .map(|b| b.to_pixel(width, height))
        .collect();

    let stem = stem_of(image_path);
    let ext = image_path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut counter = 0;
    for captured in captured_windows(width, height, options.crop_size, options.stride(), &pixel_boxes) {
        match emitter.emit(&image, &stem, &ext, &captured, counter, qualifying.len(), sink) {
            Ok(_) => counter += 1,
            Err(e) if aborts_run(&e) => return Err(e),
            Err(e) => {
                warn!(
                    "Abandoning {} after {counter} crop(s): {e}",
                    image_path.display()
                );
                return Ok(ImageOutcome::Failed { crops: counter });
            }
        }
    }

    debug!(
        "{}: {} qualifying boxes, {counter} crops",
        image_path.display(),
        qualifying.len()
    );

    Ok(ImageOutcome::Cropped { crops: counter })
}

/// Manifest failures end the whole run; everything else is per image.
fn aborts_run(e: &Error) -> bool {
    matches!(
        e,
        Error::ManifestWrite { .. } | Error::ManifestSerialize { .. }
    )
}

/// Pair every image under `images_dir` with its annotation path.
///
/// If `images_dir` has any of the `train`, `val`, `test` subdirectories,
/// those are processed in that order; annotations for a split come from
/// `labels_dir/<split>` when it exists, else from `labels_dir`. Otherwise
/// `images_dir` is treated as flat. Each directory is listed once and
/// sorted by file name.
///
/// # Errors
///
/// Returns an error if `images_dir` is missing or a listing fails.
pub fn collect_sources(images_dir: &Path, labels_dir: &Path) -> Result<Vec<SourceImage>> {
    if !images_dir.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: images_dir.to_path_buf(),
        });
    }

    let splits: Vec<&str> = SPLIT_DIRS
        .iter()
        .copied()
        .filter(|split| images_dir.join(split).is_dir())
        .collect();

    let dirs: Vec<(PathBuf, PathBuf)> = if splits.is_empty() {
        vec![(images_dir.to_path_buf(), labels_dir.to_path_buf())]
    } else {
        splits
            .into_iter()
            .map(|split| {
                let split_labels = labels_dir.join(split);
                let split_labels = if split_labels.is_dir() {
                    split_labels
                } else {
                    labels_dir.to_path_buf()
                };
                (images_dir.join(split), split_labels)
            })
            .collect()
    };

    let mut sources = Vec::new();
    for (image_dir, label_dir) in dirs {
        for image_path in list_files_sorted(&image_dir)? {
            if !is_image_file(&image_path) {
                continue;
            }
            let label_path = label_path_for(&image_path, &label_dir);
            sources.push(SourceImage {
                image_path,
                label_path,
            });
        }
    }

    Ok(sources)
}
