//! Run outputs: crop manifest and progress reporting.

mod manifest;
pub mod progress;
mod writer;

pub use manifest::{ManifestRecord, ManifestWriter};
pub use writer::ManifestSink;
