pub mod chart_fmt;
pub mod process_fmt;
pub mod recommendation_fmt;
pub mod status_fmt;
