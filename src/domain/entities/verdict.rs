use serde::{Deserialize, Serialize};

use crate::domain::value_objects::trend_status::TrendStatus;

/// Early/late decile averages of an RSS sequence and the growth between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthWindow {
    /// Number of samples in each of the early and late windows
    pub window: usize,
    pub early_avg: f64,
    pub late_avg: f64,
    /// `0.0` whenever `early_avg` is not positive
    pub growth_rate_percent: f64,
}

/// Classification of one process plus the evidence behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendVerdict {
    pub status: TrendStatus,
    pub sample_count: usize,
    pub min_rss: f64,
    pub max_rss: f64,
    pub avg_rss: f64,
    pub median_rss: f64,
    pub stdev_rss: f64,
    pub early_avg: f64,
    pub late_avg: f64,
    pub growth_rate_percent: f64,
    pub avg_cpu: f64,
    pub max_cpu: f64,
    pub avg_mem_percent: f64,
}
