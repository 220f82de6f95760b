use clap::Parser;
use tracing_subscriber::EnvFilter;

use memtrend::application::config::{expand_path, AppConfig};
use memtrend::application::services::remediation::RemediationCatalog;
use memtrend::application::services::report::ReportComposer;
use memtrend::domain::value_objects::chart_dimensions::ChartDimensions;
use memtrend::infrastructure::ingest::open_sample_source;
use memtrend::presentation::cli::app::Cli;
use memtrend::presentation::cli::commands::analyze::run_analyze;

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let config_path = cli
        .config
        .as_deref()
        .map(|p| expand_path(&p.to_string_lossy()));
    let config = AppConfig::resolve(config_path.as_deref())?;

    // Command-line sizes win over the config file
    let dimensions = ChartDimensions::new(
        cli.width.unwrap_or(config.chart.width),
        cli.height.unwrap_or(config.chart.height),
    );
    let catalog = RemediationCatalog::with_overrides(&config.remediation.checklists);
    let composer = ReportComposer::new(&catalog, dimensions);

    let input = expand_path(&cli.input);
    let source = open_sample_source(&input);
    run_analyze(&*source, &composer, cli.json)
}
