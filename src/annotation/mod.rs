//! YOLO annotation reading and box geometry.
//!
//! Annotation files hold one object per line as
//! `<class> <cx> <cy> <w> <h>`, with all four floats normalized to the
//! paired image's width and height.

mod boxes;
mod reader;

pub use boxes::{NormalizedBox, PixelBox};
pub use reader::{label_path_for, read_annotations};
