pub mod csv_source;
pub mod json_source;

use std::path::Path;

use crate::domain::ports::SampleSource;

use self::csv_source::CsvSampleSource;
use self::json_source::JsonSampleSource;

/// Pick an adapter from the file extension: `.json` reads a JSON array,
/// anything else is treated as CSV.
#[must_use]
pub fn open_sample_source(path: &Path) -> Box<dyn SampleSource> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        tracing::debug!(path = %path.display(), "reading samples as JSON");
        Box::new(JsonSampleSource::new(path))
    } else {
        tracing::debug!(path = %path.display(), "reading samples as CSV");
        Box::new(CsvSampleSource::new(path))
    }
}
