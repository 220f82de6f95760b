use anyhow::Context;

use crate::application::services::report::{LeakReport, ReportComposer};
use crate::domain::ports::sample_source::SampleSource;
use crate::infrastructure::persistence::sample_store::InMemorySampleStore;
use crate::presentation::cli::formatters::process_fmt::print_process_report;
use crate::presentation::cli::formatters::recommendation_fmt::{
    print_next_steps, print_recommendations,
};
use crate::presentation::cli::formatters::status_fmt::{print_banner, RULE_WIDTH};

/// Reads every record from `source`, groups them and composes the report.
///
/// # Errors
///
/// Returns an error if the input cannot be read, a record is malformed, or
/// no record yields a usable sample.
pub fn build_report(
    source: &dyn SampleSource,
    composer: &ReportComposer<'_>,
) -> anyhow::Result<LeakReport> {
    let input = source.describe();
    let records = source
        .load()
        .with_context(|| format!("Failed to load samples from {input}"))?;
    let store = InMemorySampleStore::from_records(&records)
        .with_context(|| format!("Failed to parse samples from {input}"))?;
    tracing::info!(
        records = records.len(),
        processes = store.len(),
        dropped = store.dropped(),
        "samples loaded"
    );
    Ok(composer.compose(&input, &store)?)
}

/// Runs the full analysis and prints it as text or JSON.
///
/// # Errors
///
/// Returns an error if the report cannot be built or JSON serialization fails.
pub fn run_analyze(
    source: &dyn SampleSource,
    composer: &ReportComposer<'_>,
    json: bool,
) -> anyhow::Result<()> {
    let report = build_report(source, composer)?;
    let leaking = report
        .processes
        .iter()
        .filter(|p| p.verdict.as_ref().is_some_and(|v| v.status.is_leak()))
        .count();
    tracing::info!(
        processes = report.processes.len(),
        leaking,
        "analysis finished"
    );
    if json {
        print_report_json(&report)
    } else {
        print_report_human(&report);
        Ok(())
    }
}

fn print_report_json(report: &LeakReport) -> anyhow::Result<()> {
    let output = serde_json::to_string_pretty(report)?;
    println!("{output}");
    Ok(())
}

fn print_report_human(report: &LeakReport) {
    print_banner("MEMORY LEAK ANALYSIS");
    println!("Data file: {}", report.input);

    for process in &report.processes {
        print_process_report(process);
    }

    print_recommendations(&report.recommendations);
    print_next_steps(report.next_steps);

    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Analysis complete!");
}
