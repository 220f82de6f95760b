use serde::{Deserialize, Serialize};

use super::sample::Sample;

/// All samples of a single process, in file order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSeries {
    pub name: String,
    pub samples: Vec<Sample>,
}

impl ProcessSeries {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            samples: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// RSS readings in arrival order.
    #[must_use]
    pub fn rss_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.rss_mb).collect()
    }

    #[must_use]
    pub fn cpu_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.cpu_percent).collect()
    }

    #[must_use]
    pub fn mem_percent_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.mem_percent).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(rss_mb: f64, cpu_percent: f64) -> Sample {
        Sample {
            timestamp: NaiveDate::from_ymd_opt(2025, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap_or_default(),
            rss_mb,
            cpu_percent,
            mem_percent: 0.5,
        }
    }

    #[test]
    fn new_series_is_empty() {
        let series = ProcessSeries::new("puma");
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert!(series.rss_values().is_empty());
    }

    #[test]
    fn extractors_keep_arrival_order() {
        let mut series = ProcessSeries::new("puma");
        series.samples.push(sample(300.0, 1.0));
        series.samples.push(sample(100.0, 9.0));
        series.samples.push(sample(200.0, 4.0));
        assert_eq!(series.rss_values(), vec![300.0, 100.0, 200.0]);
        assert_eq!(series.cpu_values(), vec![1.0, 9.0, 4.0]);
        assert_eq!(series.mem_percent_values(), vec![0.5, 0.5, 0.5]);
    }
}
