use chrono::NaiveDateTime;
use thiserror::Error;

use crate::domain::entities::sample::{Sample, TIMESTAMP_FORMAT};

/// `pid` value written by the sampler when the process was not running.
pub const ABSENT_PID: &str = "N/A";

/// `rss_mb` value written by the sampler when the process was not found.
pub const ABSENT_RSS: &str = "0";

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("cannot read input '{path}': {reason}")]
    Unreadable { path: String, reason: String },
    #[error("malformed CSV input: {0}")]
    Csv(String),
    #[error("malformed JSON input: {0}")]
    Json(String),
    #[error("record {line}: invalid {field} value '{value}'")]
    InvalidField {
        line: u64,
        field: &'static str,
        value: String,
    },
}

/// One input row with its fields still in textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Position in the input, for error messages (CSV line or JSON array index)
    pub line: u64,
    pub process: String,
    pub pid: String,
    pub timestamp: String,
    pub rss_mb: String,
    pub cpu_percent: String,
    pub mem_percent: String,
}

impl RawRecord {
    /// True when the sampler marked the process as absent for this tick.
    /// Checked on raw text so absent rows are never parsed.
    #[must_use]
    pub fn is_unmonitored(&self) -> bool {
        let pid = self.pid.trim();
        pid.is_empty() || pid == ABSENT_PID || self.rss_mb.trim() == ABSENT_RSS
    }

    /// Parses the typed fields.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::InvalidField` naming the first field that fails
    /// to parse.
    pub fn to_sample(&self) -> Result<Sample, IngestError> {
        let timestamp = NaiveDateTime::parse_from_str(self.timestamp.trim(), TIMESTAMP_FORMAT)
            .map_err(|_| self.invalid("timestamp", &self.timestamp))?;
        Ok(Sample {
            timestamp,
            rss_mb: self.parse_number("rss_mb", &self.rss_mb)?,
            cpu_percent: self.parse_number("cpu_percent", &self.cpu_percent)?,
            mem_percent: self.parse_number("mem_percent", &self.mem_percent)?,
        })
    }

    fn parse_number(&self, field: &'static str, raw: &str) -> Result<f64, IngestError> {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
            _ => Err(self.invalid(field, raw)),
        }
    }

    fn invalid(&self, field: &'static str, raw: &str) -> IngestError {
        IngestError::InvalidField {
            line: self.line,
            field,
            value: raw.to_string(),
        }
    }
}

/// Produces raw records in input order.
pub trait SampleSource {
    /// Human-readable description of where records come from.
    fn describe(&self) -> String;

    /// Read every record.
    ///
    /// # Errors
    ///
    /// Returns `IngestError` if the input cannot be read or is structurally
    /// malformed (missing columns, invalid JSON).
    fn load(&self) -> Result<Vec<RawRecord>, IngestError>;
}
