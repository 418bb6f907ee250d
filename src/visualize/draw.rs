//! Drawing annotation boxes onto images.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use tracing::{debug, info, warn};

use crate::annotation::{NormalizedBox, label_path_for, read_annotations};
use crate::constants::visualize::BOX_COLOR;
use crate::dataset::{is_image_file, list_files_sorted, open_image, stem_of};
use crate::error::{Error, Result};
use crate::output::progress;

/// Totals for a visualization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualizeSummary {
    /// Images considered.
    pub images: usize,
    /// Images written with boxes drawn.
    pub drawn: usize,
    /// Images without an annotation file.
    pub missing_annotation: usize,
    /// Images that failed to decode.
    pub unreadable: usize,
    /// Images whose annotations could not be read or whose output could
    /// not be written.
    pub errors: usize,
}

/// Draw every box as a hollow rectangle, `thickness` pixels wide, growing
/// inward from the box edges.
///
/// Corners are `(c ± size/2) · dimension`, truncated toward zero. Parts of
/// a box outside the image are clipped.
pub fn draw_boxes(image: &mut RgbImage, boxes: &[NormalizedBox], thickness: u32) {
    let (width, height) = image.dimensions();
    let color = Rgb(BOX_COLOR);
    let thickness = i64::from(thickness);

    for b in boxes {
        let (x1, y1, x2, y2) = b.to_pixel(width, height).truncated();
        // Edges more than `thickness` outside the image draw nothing visible.
        let x1 = i64::from(x1).max(-thickness);
        let y1 = i64::from(y1).max(-thickness);
        let x2 = i64::from(x2).min(i64::from(width) - 1 + thickness);
        let y2 = i64::from(y2).min(i64::from(height) - 1 + thickness);

        for t in 0..thickness {
            let w = x2 - x1 + 1 - 2 * t;
            let h = y2 - y1 + 1 - 2 * t;
            if w <= 0 || h <= 0 {
                break;
            }
            let (Ok(x), Ok(y), Ok(w), Ok(h)) = (
                i32::try_from(x1 + t),
                i32::try_from(y1 + t),
                u32::try_from(w),
                u32::try_from(h),
            ) else {
                break;
            };
            draw_hollow_rect_mut(image, Rect::at(x, y).of_size(w, h), color);
        }
    }
}

/// What happened to one image during visualization.
enum ImageOutcome {
    Drawn,
    MissingAnnotation,
    Unreadable,
}

/// Write a copy of every annotated image in `images_dir` to `output_dir`
/// with its boxes drawn, keeping the file name.
///
/// Images that fail (unreadable annotation file, output write) are warned
/// about and counted; the run continues.
///
/// # Errors
///
/// Returns an error if `images_dir` cannot be listed or `output_dir`
/// cannot be created.
pub fn visualize_dataset(
    images_dir: &Path,
    labels_dir: &Path,
    output_dir: &Path,
    thickness: u32,
    progress_enabled: bool,
) -> Result<VisualizeSummary> {
    let images: Vec<PathBuf> = list_files_sorted(images_dir)?
        .into_iter()
        .filter(|p| is_image_file(p))
        .collect();

    std::fs::create_dir_all(output_dir).map_err(|e| Error::OutputDirCreateFailed {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let pb = progress::create_image_progress(images.len(), progress_enabled);
    let mut summary = VisualizeSummary::default();

    for image_path in &images {
        summary.images += 1;
        if let Some(pb) = &pb {
            pb.set_message(stem_of(image_path));
        }

        match visualize_image(image_path, labels_dir, output_dir, thickness) {
            Ok(ImageOutcome::Drawn) => summary.drawn += 1,
            Ok(ImageOutcome::MissingAnnotation) => summary.missing_annotation += 1,
            Ok(ImageOutcome::Unreadable) => summary.unreadable += 1,
            Err(e) => {
                warn!("Failed to visualize {}: {e}", image_path.display());
                summary.errors += 1;
            }
        }

        progress::inc_progress(pb.as_ref());
    }

    progress::finish_progress(pb, "Complete");
    info!(
        "Visualization complete: {} of {} images written to {}",
        summary.drawn,
        summary.images,
        output_dir.display()
    );
    if summary.unreadable > 0 || summary.errors > 0 {
        warn!(
            "{} unreadable image(s), {} image(s) with errors",
            summary.unreadable, summary.errors
        );
    }

    Ok(summary)
}

fn visualize_image(
    image_path: &Path,
    labels_dir: &Path,
    output_dir: &Path,
    thickness: u32,
) -> Result<ImageOutcome> {
    let label_path = label_path_for(image_path, labels_dir);
    if !label_path.is_file() {
        debug!("Skipping {} (no annotation file)", image_path.display());
        return Ok(ImageOutcome::MissingAnnotation);
    }

    let boxes = read_annotations(&label_path)?;

    let mut canvas = match open_image(image_path) {
        Ok(image) => image.to_rgb8(),
        Err(e) => {
            warn!("Skipping unreadable image: {e}");
            return Ok(ImageOutcome::Unreadable);
        }
    };
    draw_boxes(&mut canvas, &boxes, thickness);

    let Some(name) = image_path.file_name() else {
        debug!("Skipping {} (no file name)", image_path.display());
        return Ok(ImageOutcome::Unreadable);
    };
    let out_path = output_dir.join(name);
    canvas.save(&out_path).map_err(|e| Error::ImageWrite {
        path: out_path.clone(),
        source: e,
    })?;

    Ok(ImageOutcome::Drawn)
}
