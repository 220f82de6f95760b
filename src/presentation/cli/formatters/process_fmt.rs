use colored::Colorize;

use crate::application::services::report::ProcessReport;
use crate::domain::entities::verdict::TrendVerdict;

use super::chart_fmt::print_chart;
use super::status_fmt::{colorize_growth, print_section_header, status_badge};

/// Numeric summary lines for one classified process.
#[must_use]
pub fn summary_lines(verdict: &TrendVerdict) -> Vec<String> {
    vec![
        format!("Measurements: {}", verdict.sample_count),
        format!("Min RSS: {:.2} MB", verdict.min_rss),
        format!("Max RSS: {:.2} MB", verdict.max_rss),
        format!("Avg RSS: {:.2} MB", verdict.avg_rss),
        format!("Median:  {:.2} MB", verdict.median_rss),
        format!("Std Dev: {:.2} MB", verdict.stdev_rss),
        format!("Avg MEM: {:.2}%", verdict.avg_mem_percent),
        format!(
            "Growth:  {} (first 10% vs last 10%)",
            colorize_growth(verdict.growth_rate_percent)
        ),
        format!("Status:  {}", status_badge(verdict.status)),
    ]
}

#[must_use]
pub fn cpu_lines(verdict: &TrendVerdict) -> Vec<String> {
    vec![
        format!("  Average: {:.1}%", verdict.avg_cpu),
        format!("  Max: {:.1}%", verdict.max_cpu),
    ]
}

/// Prints the summary, chart and CPU block of one process, or a "no data"
/// notice when it had no usable samples.
pub fn print_process_report(report: &ProcessReport) {
    println!();
    print_section_header(&format!("=== {} ===", report.name));

    let Some(verdict) = &report.verdict else {
        println!("{}", "No data available".dimmed());
        return;
    };

    for line in summary_lines(verdict) {
        println!("{line}");
    }

    if let Some(chart) = &report.chart {
        println!();
        println!("Memory Usage Chart (RSS in MB):");
        print_chart(chart);
    }

    println!();
    println!("CPU Usage:");
    for line in cpu_lines(verdict) {
        println!("{line}");
    }
}
