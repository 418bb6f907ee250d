//! Annotation file reading.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::trace;

use super::NormalizedBox;
use crate::constants::{LABEL_EXTENSION, crop::ANNOTATION_FIELDS};
use crate::error::{Error, Result};

/// Read all boxes from a YOLO annotation file, in file order.
///
/// A missing file yields an empty list. Lines that do not split into
/// exactly five whitespace-separated tokens, or whose tokens are not
/// numbers, are skipped.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_annotations(path: &Path) -> Result<Vec<NormalizedBox>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(Error::AnnotationRead {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let boxes = contents
        .lines()
        .enumerate()
        .filter_map(|(line_idx, line)| {
            let parsed = parse_line(line);
            if parsed.is_none() && !line.trim().is_empty() {
                trace!(
                    "Skipping malformed line {} in {}",
                    line_idx + 1,
                    path.display()
                );
            }
            parsed
        })
        .collect();

    Ok(boxes)
}

/// Path of the annotation file paired with `image_path` inside `labels_dir`.
///
/// Pairing is by file stem; the image extension is ignored.
#[must_use]
pub fn label_path_for(image_path: &Path, labels_dir: &Path) -> PathBuf {
    let stem = image_path.file_stem().unwrap_or_default();
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(LABEL_EXTENSION);
    labels_dir.join(name)
}

fn parse_line(line: &str) -> Option<NormalizedBox> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != ANNOTATION_FIELDS {
        return None;
    }

    Some(NormalizedBox {
        class_id: tokens[0].parse().ok()?,
        center_x: tokens[1].parse().ok()?,
        center_y: tokens[2].parse().ok()?,
        width: tokens[3].parse().ok()?,
        height: tokens[4].parse().ok()?,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_simple_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0 0.500000 0.500000 0.100000 0.200000").unwrap();
        writeln!(file, "3 0.1 0.2 0.3 0.4").unwrap();
        file.flush().unwrap();

        let boxes = read_annotations(file.path()).unwrap();
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].class_id, 0);
        assert_eq!(boxes[0].height, 0.2);
        assert_eq!(boxes[1].class_id, 3);
        assert_eq!(boxes[1].center_x, 0.1);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let boxes = read_annotations(Path::new("/nonexistent/labels/img.txt")).unwrap();
        assert!(boxes.is_empty());
    }

    #[test]
    fn test_skips_malformed_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0 0.5 0.5 0.1").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "0 0.5 0.5 0.1 0.1 0.9").unwrap();
        writeln!(file, "bird 0.5 0.5 0.1 0.1").unwrap();
        writeln!(file, "  0   0.4 0.4 0.2 0.2  ").unwrap();
        file.flush().unwrap();

        let boxes = read_annotations(file.path()).unwrap();
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].center_x, 0.4);
    }

    #[test]
    fn test_label_path_for() {
        let path = label_path_for(Path::new("/data/images/IMG_01.JPG"), Path::new("/data/labels"));
        assert_eq!(path, PathBuf::from("/data/labels/IMG_01.txt"));
    }

    #[test]
    fn test_label_path_for_dotted_stem() {
        let path = label_path_for(Path::new("a/bird.v2.png"), Path::new("l"));
        assert_eq!(path, PathBuf::from("l/bird.v2.txt"));
    }
}
