pub mod chart;
pub mod sample;
pub mod series;
pub mod verdict;

pub use chart::ChartModel;
pub use sample::{Sample, TIMESTAMP_FORMAT};
pub use series::ProcessSeries;
pub use verdict::{GrowthWindow, TrendVerdict};
