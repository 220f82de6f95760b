use super::trend_status::TrendStatus;

/// Growth rate (percent) above which a process is flagged as leaking.
pub const LEAK_GROWTH_PERCENT: f64 = 10.0;

/// Growth rate (percent) above which a process gets a warning.
pub const WARNING_GROWTH_PERCENT: f64 = 5.0;

/// Maps a growth rate to a status. Thresholds are strict and checked
/// leak-first, so exactly 10.0% is a warning and exactly 5.0% is ok.
#[must_use]
pub fn status_for_growth(growth_rate_percent: f64) -> TrendStatus {
    if growth_rate_percent > LEAK_GROWTH_PERCENT {
        TrendStatus::Leak
    } else if growth_rate_percent > WARNING_GROWTH_PERCENT {
        TrendStatus::Warning
    } else {
        TrendStatus::Ok
    }
}
