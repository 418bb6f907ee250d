//! Shared helpers for integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

/// Write a solid gray RGB image of the given size.
pub fn write_image(path: &Path, width: u32, height: u32) {
    let image = RgbImage::from_pixel(width, height, Rgb([128, 128, 128]));
    image.save(path).unwrap();
}

/// Write an annotation file with one line per entry.
pub fn write_labels(path: &Path, lines: &[&str]) {
    let mut contents = lines.join("\n");
    contents.push('\n');
    std::fs::write(path, contents).unwrap();
}

/// Create `root/images` and `root/labels` and return them.
pub fn dataset_dirs(root: &Path) -> (PathBuf, PathBuf) {
    let images = root.join("images");
    let labels = root.join("labels");
    std::fs::create_dir_all(&images).unwrap();
    std::fs::create_dir_all(&labels).unwrap();
    (images, labels)
}

/// Read `metadata.jsonl` as parsed JSON values.
pub fn read_manifest(output_dir: &Path) -> Vec<serde_json::Value> {
    let contents = std::fs::read_to_string(output_dir.join("metadata.jsonl")).unwrap();
    contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

/// Sorted file names in a directory.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
