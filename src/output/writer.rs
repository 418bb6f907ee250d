//! Manifest sink trait definition.

use crate::error::Result;
use crate::output::ManifestRecord;

/// Trait for consuming manifest records in emission order.
pub trait ManifestSink {
    /// Append a single record.
    fn append(&mut self, record: &ManifestRecord) -> Result<()>;

    /// Finalize the output (flush, close, etc.).
    fn finalize(&mut self) -> Result<()>;
}

/// In-memory sink, mostly useful for dry runs and tests.
impl ManifestSink for Vec<ManifestRecord> {
    fn append(&mut self, record: &ManifestRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }
}
