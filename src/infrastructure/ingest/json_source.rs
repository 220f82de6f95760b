use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::ports::sample_source::{IngestError, RawRecord, SampleSource};

/// One object of the JSON array. Numeric fields may be written as numbers or
/// strings; `null` reads as an empty field.
#[derive(Debug, Deserialize)]
struct JsonRow {
    process: String,
    #[serde(default)]
    pid: Value,
    timestamp: String,
    rss_mb: Value,
    cpu_percent: Value,
    mem_percent: Value,
}

/// Reads samples from a JSON array of objects.
pub struct JsonSampleSource {
    path: PathBuf,
}

impl JsonSampleSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SampleSource for JsonSampleSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<RawRecord>, IngestError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| IngestError::Unreadable {
                path: self.describe(),
                reason: e.to_string(),
            })?;
        parse_json(&content)
    }
}

fn field_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parses a JSON array of sample objects, keeping array order. Record
/// positions are 1-based array indices.
///
/// # Errors
///
/// Returns `IngestError::Json` if the document is not an array of objects
/// with the expected fields.
pub fn parse_json(content: &str) -> Result<Vec<RawRecord>, IngestError> {
    let rows: Vec<JsonRow> =
        serde_json::from_str(content).map_err(|e| IngestError::Json(e.to_string()))?;
    Ok(rows
        .into_iter()
        .zip(1_u64..)
        .map(|(row, line)| RawRecord {
            line,
            process: row.process,
            pid: field_text(&row.pid),
            timestamp: row.timestamp,
            rss_mb: field_text(&row.rss_mb),
            cpu_percent: field_text(&row.cpu_percent),
            mem_percent: field_text(&row.mem_percent),
        })
        .collect())
}
