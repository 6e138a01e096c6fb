use std::process::ExitCode;

use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use geonames_city_export::app::App;
use geonames_city_export::config::ExportConfig;
use geonames_city_export::error::ExportError;
use geonames_city_export::geonames::GeoNamesHttpClient;
use geonames_city_export::output::ConsoleOutput;

#[derive(Parser)]
#[command(name = "geonames-export")]
#[command(about = "Export the GeoNames cities5000 dump as a per-country top-cities JSON feed")]
#[command(version, author)]
struct Cli {}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(export) = report.downcast_ref::<ExportError>() {
            return ExitCode::from(map_exit_code(export));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &ExportError) -> u8 {
    match error {
        ExportError::Http(_) | ExportError::Status { .. } => 3,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    let client = GeoNamesHttpClient::new().into_diagnostic()?;
    let app = App::new(ExportConfig::default(), client);
    let summary = app.run(&ConsoleOutput).into_diagnostic()?;
    ConsoleOutput::print_summary(&summary);
    Ok(())
}
