use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::ports::sample_source::{IngestError, RawRecord, SampleSource};

/// Columns read from the sampler's CSV output. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    process: String,
    pid: String,
    timestamp: String,
    rss_mb: String,
    cpu_percent: String,
    mem_percent: String,
}

/// Reads samples from a CSV file with a header row.
pub struct CsvSampleSource {
    path: PathBuf,
}

impl CsvSampleSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SampleSource for CsvSampleSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<RawRecord>, IngestError> {
        let file = std::fs::File::open(&self.path).map_err(|e| IngestError::Unreadable {
            path: self.describe(),
            reason: e.to_string(),
        })?;
        parse_csv(file)
    }
}

/// Parses CSV text into raw records, keeping row order.
///
/// # Errors
///
/// Returns `IngestError::Csv` if the header lacks a required column or a row
/// cannot be decoded.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<RawRecord>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| IngestError::Csv(e.to_string()))?
        .clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| IngestError::Csv(e.to_string()))?;
        let line = row.position().map_or(0, csv::Position::line);
        let parsed: CsvRow = row
            .deserialize(Some(&headers))
            .map_err(|e| IngestError::Csv(e.to_string()))?;
        records.push(RawRecord {
            line,
            process: parsed.process,
            pid: parsed.pid,
            timestamp: parsed.timestamp,
            rss_mb: parsed.rss_mb,
            cpu_percent: parsed.cpu_percent,
            mem_percent: parsed.mem_percent,
        });
    }
    Ok(records)
}
