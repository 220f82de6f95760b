#![allow(clippy::expect_used)]

use std::path::Path;

use memtrend::application::config::AppConfig;
use memtrend::application::services::remediation::RemediationCatalog;
use memtrend::application::services::report::ReportComposer;
use memtrend::domain::value_objects::chart_dimensions::ChartDimensions;
use memtrend::infrastructure::ingest::open_sample_source;
use memtrend::presentation::cli::commands::analyze::build_report;

#[test]
fn config_file_drives_chart_size_and_checklists() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[chart]\nwidth = 10\nheight = 4\n\n\
         [remediation.checklists]\npuma = [\"Restart puma workers\"]\n",
    )
    .expect("write config");

    let config = AppConfig::resolve(Some(&path)).expect("resolve config");
    let catalog = RemediationCatalog::with_overrides(&config.remediation.checklists);
    let composer = ReportComposer::new(&catalog, ChartDimensions::from(&config.chart));

    let input = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/memory_mixed.csv");
    let source = open_sample_source(&input);
    let report = build_report(&*source, &composer).expect("analysis failed");

    let puma = report
        .processes
        .iter()
        .find(|p| p.name == "puma")
        .and_then(|p| p.chart.as_ref())
        .expect("puma chart");
    assert_eq!(puma.height, 4);
    assert_eq!(puma.columns(), 10);

    assert_eq!(report.recommendations[0].actions, ["Restart puma workers"]);
}

#[test]
fn broken_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[chart\nwidth = ").expect("write config");
    assert!(AppConfig::resolve(Some(&path)).is_err());
}
