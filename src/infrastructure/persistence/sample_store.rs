use std::collections::BTreeMap;

use crate::domain::entities::series::ProcessSeries;
use crate::domain::ports::sample_source::{IngestError, RawRecord};
use crate::domain::ports::series_store::SeriesStore;

/// In-memory sample store keyed by process name.
///
/// Samples keep file order; iteration over processes is name-sorted.
#[derive(Debug, Default)]
pub struct InMemorySampleStore {
    series: BTreeMap<String, ProcessSeries>,
    dropped: usize,
}

impl InMemorySampleStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            series: BTreeMap::new(),
            dropped: 0,
        }
    }

    /// Builds a store from records in input order.
    ///
    /// # Errors
    ///
    /// Returns the first `IngestError` raised by a monitored record.
    pub fn from_records(records: &[RawRecord]) -> Result<Self, IngestError> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Number of known processes, including those without samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Records skipped because the process was absent.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }
}

impl SeriesStore for InMemorySampleStore {
    fn insert(&mut self, record: &RawRecord) -> Result<bool, IngestError> {
        let name = record.process.trim();
        if record.is_unmonitored() {
            tracing::debug!(
                line = record.line,
                process = name,
                pid = %record.pid,
                "skipping unmonitored record"
            );
            self.dropped += 1;
            self.series
                .entry(name.to_string())
                .or_insert_with(|| ProcessSeries::new(name));
            return Ok(false);
        }

        let sample = record.to_sample()?;
        self.series
            .entry(name.to_string())
            .or_insert_with(|| ProcessSeries::new(name))
            .samples
            .push(sample);
        Ok(true)
    }

    fn all_series(&self) -> Vec<&ProcessSeries> {
        self.series.values().collect()
    }

    fn total_samples(&self) -> usize {
        self.series.values().map(ProcessSeries::len).sum()
    }
}
