//! Integration tests for box visualization.

mod common;

use birdprep::visualize::visualize_dataset;
use common::{dataset_dirs, file_names, write_image, write_labels};
use image::Rgb;
use tempfile::TempDir;

#[test]
fn test_visualize_draws_annotated_images_only() {
    let root = TempDir::new().unwrap();
    let (images, labels) = dataset_dirs(root.path());
    write_image(&images.join("with.png"), 64, 64);
    write_labels(&labels.join("with.txt"), &["0 0.5 0.5 0.5 0.5"]);
    write_image(&images.join("without.png"), 64, 64);
    let output = root.path().join("vis");

    let summary = visualize_dataset(&images, &labels, &output, 2, false).unwrap();

    assert_eq!(summary.images, 2);
    assert_eq!(summary.drawn, 1);
    assert_eq!(summary.missing_annotation, 1);
    assert_eq!(file_names(&output), vec!["with.png"]);

    let drawn = image::open(output.join("with.png")).unwrap().to_rgb8();
    // Box spans pixels 16..48
    assert_eq!(drawn.get_pixel(16, 16), &Rgb([0, 255, 0]));
    assert_eq!(drawn.get_pixel(17, 30), &Rgb([0, 255, 0]));
    assert_eq!(drawn.get_pixel(32, 32), &Rgb([128, 128, 128]));
    assert_eq!(drawn.get_pixel(5, 5), &Rgb([128, 128, 128]));
}

#[test]
fn test_visualize_skips_unreadable_images() {
    let root = TempDir::new().unwrap();
    let (images, labels) = dataset_dirs(root.path());
    std::fs::write(images.join("broken.png"), b"not a png").unwrap();
    write_labels(&labels.join("broken.txt"), &["0 0.5 0.5 0.5 0.5"]);

    let summary =
        visualize_dataset(&images, &labels, &root.path().join("vis"), 2, false).unwrap();
    assert_eq!(summary.unreadable, 1);
    assert_eq!(summary.drawn, 0);
}

#[test]
fn test_visualize_continues_past_unreadable_annotations() {
    let root = TempDir::new().unwrap();
    let (images, labels) = dataset_dirs(root.path());
    write_image(&images.join("a_bad.png"), 64, 64);
    // Not valid UTF-8, so the annotation file cannot be read as text
    std::fs::write(labels.join("a_bad.txt"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
    write_image(&images.join("b_good.png"), 64, 64);
    write_labels(&labels.join("b_good.txt"), &["0 0.5 0.5 0.5 0.5"]);
    let output = root.path().join("vis");

    let summary = visualize_dataset(&images, &labels, &output, 2, false).unwrap();

    assert_eq!(summary.images, 2);
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.drawn, 1);
    assert_eq!(file_names(&output), vec!["b_good.png"]);
}
