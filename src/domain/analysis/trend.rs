use crate::domain::entities::series::ProcessSeries;
use crate::domain::entities::verdict::{GrowthWindow, TrendVerdict};
use crate::domain::value_objects::growth_thresholds::status_for_growth;

use super::stats;

/// Size of the early and late comparison windows: a tenth of the series,
/// never less than one sample.
#[must_use]
pub const fn decile_window(sample_count: usize) -> usize {
    let k = sample_count / 10;
    if k == 0 {
        1
    } else {
        k
    }
}

/// Compares the mean of the first decile with the mean of the last decile.
///
/// Windows overlap for series of two samples or fewer. A non-positive early
/// average yields a growth rate of `0.0`, so growth starting from a zero
/// baseline is never reported.
#[must_use]
pub fn growth_window(rss: &[f64]) -> Option<GrowthWindow> {
    let n = rss.len();
    if n == 0 {
        return None;
    }
    let window = decile_window(n);
    let early_avg = stats::mean(&rss[..window])?;
    let late_avg = stats::mean(&rss[n - window..])?;
    let growth_rate_percent = if early_avg > 0.0 {
        (late_avg - early_avg) / early_avg * 100.0
    } else {
        0.0
    };
    Some(GrowthWindow {
        window,
        early_avg,
        late_avg,
        growth_rate_percent,
    })
}

/// Classifies a process series. Returns `None` for an empty series, which
/// callers report as "no data".
#[must_use]
pub fn classify(series: &ProcessSeries) -> Option<TrendVerdict> {
    let rss = series.rss_values();
    let cpu = series.cpu_values();

    let min_rss = stats::min(&rss)?;
    let max_rss = stats::max(&rss)?;
    // float summation can drift a ulp past the extremes on constant input
    let avg_rss = stats::mean(&rss)?.clamp(min_rss, max_rss);
    let median_rss = stats::median(&rss)?;
    let growth = growth_window(&rss)?;

    Some(TrendVerdict {
        status: status_for_growth(growth.growth_rate_percent),
        sample_count: rss.len(),
        min_rss,
        max_rss,
        avg_rss,
        median_rss,
        stdev_rss: stats::sample_stdev(&rss),
        early_avg: growth.early_avg,
        late_avg: growth.late_avg,
        growth_rate_percent: growth.growth_rate_percent,
        avg_cpu: stats::mean(&cpu)?,
        max_cpu: stats::max(&cpu)?,
        avg_mem_percent: stats::mean(&series.mem_percent_values())?,
    })
}
