#![allow(clippy::expect_used)]

use std::io::Write;
use std::path::{Path, PathBuf};

use memtrend::application::services::remediation::RemediationCatalog;
use memtrend::application::services::report::{LeakReport, ReportComposer, ReportError};
use memtrend::domain::ports::sample_source::IngestError;
use memtrend::domain::value_objects::chart_dimensions::ChartDimensions;
use memtrend::domain::value_objects::trend_status::TrendStatus;
use memtrend::infrastructure::ingest::open_sample_source;
use memtrend::presentation::cli::commands::analyze::build_report;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn analyze(path: &Path) -> anyhow::Result<LeakReport> {
    let catalog = RemediationCatalog::builtin();
    let composer = ReportComposer::new(&catalog, ChartDimensions::default());
    let source = open_sample_source(path);
    build_report(&*source, &composer)
}

#[test]
fn mixed_log_lists_processes_in_name_order() {
    let report = analyze(&fixture("memory_mixed.csv")).expect("analysis failed");
    let names: Vec<&str> = report.processes.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["agrr_daemon", "idle_worker", "puma", "solid_queue"]);
}

#[test]
fn mixed_log_classifies_each_process() {
    let report = analyze(&fixture("memory_mixed.csv")).expect("analysis failed");
    let status_of = |name: &str| {
        report
            .processes
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.verdict.as_ref())
            .map(|v| v.status)
    };
    assert_eq!(status_of("agrr_daemon"), Some(TrendStatus::Ok));
    assert_eq!(status_of("puma"), Some(TrendStatus::Leak));
    assert_eq!(status_of("solid_queue"), Some(TrendStatus::Warning));
    assert_eq!(status_of("idle_worker"), None);
}

#[test]
fn unmonitored_rows_are_dropped_before_analysis() {
    let report = analyze(&fixture("memory_mixed.csv")).expect("analysis failed");
    let agrr = report
        .processes
        .iter()
        .find(|p| p.name == "agrr_daemon")
        .expect("agrr_daemon missing");
    let verdict = agrr.verdict.as_ref().expect("agrr_daemon has samples");

    // The N/A row carries 999 MB which must never reach the statistics
    assert_eq!(verdict.sample_count, 19);
    assert!((verdict.max_rss - 80.0).abs() < 1e-9);
    assert!((verdict.avg_rss - 80.0).abs() < 1e-9);
    assert!(verdict.growth_rate_percent.abs() < 1e-9);

    let chart = agrr.chart.as_ref().expect("agrr_daemon has a chart");
    assert_eq!(chart.columns(), 19);
    assert_eq!(chart.sample_count, 19);
}

#[test]
fn process_with_only_absent_rows_has_no_data() {
    let report = analyze(&fixture("memory_mixed.csv")).expect("analysis failed");
    let idle = report
        .processes
        .iter()
        .find(|p| p.name == "idle_worker")
        .expect("idle_worker missing");
    assert!(!idle.has_data());
    assert!(idle.chart.is_none());
}

#[test]
fn only_leaking_processes_get_recommendations() {
    let report = analyze(&fixture("memory_mixed.csv")).expect("analysis failed");
    assert!(report.leak_detected());
    assert_eq!(report.recommendations.len(), 1);

    let rec = &report.recommendations[0];
    assert_eq!(rec.process, "puma");
    assert!((rec.early_avg - 100.0).abs() < 1e-9);
    assert!((rec.late_avg - 130.0).abs() < 1e-9);
    assert!((rec.growth_rate_percent - 30.0).abs() < 1e-9);
    assert_eq!(rec.window, 2, "20 samples compare two at each end");
    assert_eq!(
        rec.actions,
        RemediationCatalog::builtin().checklist("puma"),
        "puma gets its built-in checklist"
    );
}

#[test]
fn cpu_spike_is_reported_as_maximum() {
    let report = analyze(&fixture("memory_mixed.csv")).expect("analysis failed");
    let puma = report
        .processes
        .iter()
        .find(|p| p.name == "puma")
        .and_then(|p| p.verdict.as_ref())
        .expect("puma verdict");
    assert!((puma.max_cpu - 50.0).abs() < 1e-9);
    assert!((puma.avg_cpu - 7.25).abs() < 1e-9);
}

#[test]
fn json_input_is_analyzed_like_csv() {
    let report = analyze(&fixture("memory_rising.json")).expect("analysis failed");
    assert_eq!(report.processes.len(), 1);

    let verdict = report.processes[0]
        .verdict
        .as_ref()
        .expect("agrr_daemon verdict");
    assert_eq!(verdict.sample_count, 12);
    assert_eq!(verdict.status, TrendStatus::Leak);
    assert!((verdict.early_avg - 200.0).abs() < 1e-9);
    assert!((verdict.late_avg - 310.0).abs() < 1e-9);
    assert!((verdict.growth_rate_percent - 55.0).abs() < 1e-9);
    assert!((verdict.avg_mem_percent - 1.2).abs() < 1e-9);
    assert_eq!(report.recommendations[0].process, "agrr_daemon");
}

#[test]
fn header_only_file_reports_no_usable_rows() {
    let err = analyze(&fixture("header_only.csv")).expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::NoUsableRows { .. })
    ));
}

#[test]
fn malformed_number_names_the_offending_line() {
    let err = analyze(&fixture("malformed.csv")).expect_err("should fail");
    match err.downcast_ref::<IngestError>() {
        Some(IngestError::InvalidField { line, field, value }) => {
            assert_eq!(*line, 4);
            assert_eq!(*field, "rss_mb");
            assert_eq!(value, "eighty");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_file_is_unreadable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = analyze(&dir.path().join("absent.csv")).expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<IngestError>(),
        Some(IngestError::Unreadable { .. })
    ));
}

#[test]
fn narrow_chart_decimates_long_series() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("long.csv");
    let mut file = std::fs::File::create(&path).expect("create");
    writeln!(file, "timestamp,process,pid,rss_mb,cpu_percent,mem_percent").expect("write");
    for i in 0..100 {
        writeln!(
            file,
            "2025-11-02 10:{:02}:{:02},sidekiq,77,{}.0,1.0,1.0",
            i / 60,
            i % 60,
            100 + i
        )
        .expect("write");
    }
    drop(file);

    let catalog = RemediationCatalog::builtin();
    let composer = ReportComposer::new(&catalog, ChartDimensions::new(20, 5));
    let source = open_sample_source(&path);
    let report = build_report(&*source, &composer).expect("analysis failed");

    let chart = report.processes[0].chart.as_ref().expect("chart");
    assert_eq!(chart.columns(), 20);
    assert_eq!(chart.height, 5);
    assert_eq!(chart.sample_count, 100);

    // Unknown leaking process falls back to the generic checklist
    let rec = &report.recommendations[0];
    assert_eq!(rec.process, "sidekiq");
    assert_eq!(rec.actions, RemediationCatalog::builtin().checklist("sidekiq"));
}
