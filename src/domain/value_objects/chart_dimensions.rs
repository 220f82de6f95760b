use serde::{Deserialize, Serialize};

pub const DEFAULT_CHART_WIDTH: usize = 60;
pub const DEFAULT_CHART_HEIGHT: usize = 15;

/// Target size of a rendered trend chart, in terminal cells.
///
/// Height is at least 2 so the top and bottom rows are distinct, width at
/// least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDimensions {
    width: usize,
    height: usize,
}

impl ChartDimensions {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(1),
            height: height.max(2),
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_WIDTH, DEFAULT_CHART_HEIGHT)
    }
}
