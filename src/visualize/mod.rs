//! Annotation overlays for manual review.

pub mod command;
mod draw;

pub use draw::{VisualizeSummary, draw_boxes, visualize_dataset};
