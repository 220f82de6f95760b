pub mod sample_source;
pub mod series_store;

pub use sample_source::{IngestError, RawRecord, SampleSource};
pub use series_store::SeriesStore;
