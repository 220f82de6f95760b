use serde::{Deserialize, Serialize};

/// Rendering-ready chart: one level per column, already scaled and decimated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    /// Column levels, each in `0..height`
    pub levels: Vec<usize>,
    pub height: usize,
    pub width: usize,
    /// Value shown on the bottom row
    pub min_value: f64,
    /// Value shown on the top row
    pub max_value: f64,
    /// Length of the sequence before decimation
    pub sample_count: usize,
}

impl ChartModel {
    #[must_use]
    pub fn columns(&self) -> usize {
        self.levels.len()
    }

    /// Value span used for scale labels. A flat series spans one unit.
    #[must_use]
    pub fn value_span(&self) -> f64 {
        let span = self.max_value - self.min_value;
        if span > 0.0 {
            span
        } else {
            1.0
        }
    }
}
