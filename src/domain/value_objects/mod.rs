pub mod chart_dimensions;
pub mod growth_thresholds;
pub mod trend_status;

pub use chart_dimensions::ChartDimensions;
pub use growth_thresholds::{status_for_growth, LEAK_GROWTH_PERCENT, WARNING_GROWTH_PERCENT};
pub use trend_status::TrendStatus;
