use crate::domain::entities::series::ProcessSeries;

use super::sample_source::{IngestError, RawRecord};

/// Groups samples by process name.
pub trait SeriesStore {
    /// Add one record. Unmonitored records register the process name but
    /// contribute no sample. Returns whether a sample was stored.
    ///
    /// # Errors
    ///
    /// Returns `IngestError` if a monitored record has unparseable fields.
    fn insert(&mut self, record: &RawRecord) -> Result<bool, IngestError>;

    /// Every known process, sorted by name.
    fn all_series(&self) -> Vec<&ProcessSeries>;

    /// Number of stored samples across all processes.
    fn total_samples(&self) -> usize;
}
