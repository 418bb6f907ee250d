//! Annotated crop extraction.
//!
//! Slides a fixed-size window over each annotated image and writes every
//! window that fully contains a qualifying bird box as its own image, with
//! one caption record per crop in `metadata.jsonl`.

pub mod command;
mod driver;
mod emitter;
mod scanner;

pub use driver::{
    CropOptions, CropSummary, ImageOutcome, SkipReason, SourceImage, collect_sources,
    crop_sources, process_image, run_crop,
};
pub use emitter::{CropEmitter, Labels, crop_file_name};
pub use scanner::{CapturedWindow, Window, WindowScan, captured_windows, scan_windows};
