mod adapters;
mod application;
mod cli;
mod config;
mod license_audit;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::SitePackagesReader;
use adapters::outbound::python::PythonInterpreter;
use application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use application::read_models::ReportTableBuilder;
use application::use_cases::AuditLicensesUseCase;
use cli::{Args, Settings};
use config::{discover_config, load_config_from_path, ConfigFile};
use ports::outbound::{ProgressReporter, ReportFormatter};
use shared::error::{ExitCode, LicenseAuditError};
use shared::Result;
use std::path::Path;
use std::process;

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments and merge them over the config file
    let args = Args::parse_args();
    let config = load_config(args.config.as_deref())?;
    let settings = args.into_settings(config)?;

    let reporter = StderrProgressReporter::new();
    for warning in settings.warnings() {
        reporter.report_error(&format!("⚠️  Warning: {}", warning));
    }

    let Settings {
        python,
        site_packages,
        format,
        output_file,
        display,
        request,
    } = settings;

    // Create adapters (Dependency Injection)
    let package_source = if site_packages.is_empty() {
        let interpreter = PythonInterpreter::new(python);
        SitePackagesReader::from_search_path(interpreter.search_path()?)
    } else {
        SitePackagesReader::from_directories(site_packages)?
    };

    // Create use case with injected dependencies and run the audit
    let use_case = AuditLicensesUseCase::new(package_source, StderrProgressReporter::new());
    let response = use_case.execute(request)?;

    if !response.verdict.is_pass() {
        for failure in response.verdict.failures() {
            for message in failure.messages() {
                reporter.report_failure(&message);
            }
        }
        return Ok(ExitCode::PolicyViolation);
    }

    eprintln!("{}", FormatterFactory::progress_message(format));

    let table = ReportTableBuilder::build(&response, &display);
    let formatted_output = FormatterFactory::create(format).format(&table)?;

    let presenter = PresenterFactory::create(PresenterType::for_output_file(output_file));
    presenter.present(&formatted_output)?;

    Ok(ExitCode::Success)
}

/// Explicit `--config` file, otherwise whatever is discovered in the working directory
fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

/// Maps a fatal error onto the process exit code
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<LicenseAuditError>())
        .map(LicenseAuditError::exit_code)
        .unwrap_or(ExitCode::ApplicationError)
}
