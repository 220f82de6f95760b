use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout used by the sampling scripts that produce the input files.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One resource reading of a process at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: NaiveDateTime,
    pub rss_mb: f64,
    pub cpu_percent: f64,
    pub mem_percent: f64,
}
