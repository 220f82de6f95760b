//! Pure analysis over already-ingested samples: numbers in, verdicts and
//! chart models out. No I/O.

pub mod chart;
pub mod stats;
pub mod trend;

pub use chart::build_chart;
pub use trend::{classify, decile_window, growth_window};
