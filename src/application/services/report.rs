use serde::Serialize;
use thiserror::Error;

use crate::domain::analysis::{build_chart, classify, growth_window};
use crate::domain::entities::chart::ChartModel;
use crate::domain::entities::verdict::TrendVerdict;
use crate::domain::ports::series_store::SeriesStore;
use crate::domain::value_objects::chart_dimensions::ChartDimensions;
use crate::domain::value_objects::growth_thresholds::LEAK_GROWTH_PERCENT;

use super::remediation::{NextStep, RemediationCatalog, NEXT_STEPS};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("no usable samples found in {input}")]
    NoUsableRows { input: String },
}

/// Analysis of one process. Both fields are `None` when the process had no
/// usable samples.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessReport {
    pub name: String,
    pub verdict: Option<TrendVerdict>,
    pub chart: Option<ChartModel>,
}

impl ProcessReport {
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.verdict.is_some()
    }
}

/// A process whose memory grew past the leak threshold, with what to do about it.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub process: String,
    pub growth_rate_percent: f64,
    /// Samples averaged at each end of the series
    pub window: usize,
    pub early_avg: f64,
    pub late_avg: f64,
    pub actions: Vec<String>,
}

/// Everything the tool prints, in print order.
#[derive(Debug, Clone, Serialize)]
pub struct LeakReport {
    pub input: String,
    pub processes: Vec<ProcessReport>,
    pub recommendations: Vec<Recommendation>,
    pub next_steps: &'static [NextStep],
}

impl LeakReport {
    #[must_use]
    pub fn leak_detected(&self) -> bool {
        !self.recommendations.is_empty()
    }
}

/// Runs classification and chart building for every stored process, then
/// the cross-process recommendation pass.
pub struct ReportComposer<'a> {
    catalog: &'a RemediationCatalog,
    dimensions: ChartDimensions,
}

impl<'a> ReportComposer<'a> {
    #[must_use]
    pub const fn new(catalog: &'a RemediationCatalog, dimensions: ChartDimensions) -> Self {
        Self {
            catalog,
            dimensions,
        }
    }

    /// Builds the full report for `store`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NoUsableRows` if no process has any sample.
    pub fn compose(&self, input: &str, store: &dyn SeriesStore) -> Result<LeakReport, ReportError> {
        if store.total_samples() == 0 {
            return Err(ReportError::NoUsableRows {
                input: input.to_string(),
            });
        }

        let processes = store
            .all_series()
            .into_iter()
            .map(|series| {
                let verdict = classify(series);
                match &verdict {
                    Some(v) => tracing::debug!(
                        process = %series.name,
                        samples = v.sample_count,
                        growth = v.growth_rate_percent,
                        status = %v.status,
                        "classified process"
                    ),
                    None => tracing::warn!(process = %series.name, "no usable samples"),
                }
                let chart = verdict
                    .as_ref()
                    .and_then(|_| build_chart(&series.rss_values(), self.dimensions));
                ProcessReport {
                    name: series.name.clone(),
                    verdict,
                    chart,
                }
            })
            .collect();

        Ok(LeakReport {
            input: input.to_string(),
            processes,
            recommendations: self.recommend(store),
            next_steps: NEXT_STEPS,
        })
    }

    /// Recomputes growth for every process with samples and returns those
    /// above the leak threshold. Independent of the per-process verdicts.
    #[must_use]
    pub fn recommend(&self, store: &dyn SeriesStore) -> Vec<Recommendation> {
        store
            .all_series()
            .into_iter()
            .filter_map(|series| {
                let growth = growth_window(&series.rss_values())?;
                if growth.growth_rate_percent <= LEAK_GROWTH_PERCENT {
                    return None;
                }
                if !self.catalog.has_checklist(&series.name) {
                    tracing::debug!(process = %series.name, "no checklist, using generic advice");
                }
                Some(Recommendation {
                    process: series.name.clone(),
                    growth_rate_percent: growth.growth_rate_percent,
                    window: growth.window,
                    early_avg: growth.early_avg,
                    late_avg: growth.late_avg,
                    actions: self.catalog.checklist(&series.name),
                })
            })
            .collect()
    }
}
