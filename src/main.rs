mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, Settings};
use pc_configurator::adapters::outbound::console::StderrProgressReporter;
use pc_configurator::adapters::outbound::filesystem::FileSystemReader;
use pc_configurator::application::dto::CheckBuildRequest;
use pc_configurator::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pc_configurator::application::read_models::BuildReportBuilder;
use pc_configurator::application::use_cases::CheckBuildUseCase;
use pc_configurator::ports::outbound::{OutputPresenter, ProgressReporter, ReportFormatter};
use pc_configurator::shared::error::ExitCode;
use pc_configurator::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();
    let progress_reporter = StderrProgressReporter::new();

    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(config_dir(&args.build))?,
    };
    if let Some(ref config) = config {
        for warning in config.unknown_field_warnings() {
            progress_reporter.report_error(&warning);
        }
    }

    let settings = Settings::merge(args, config)?;

    // Create adapters (Dependency Injection)
    let use_case = CheckBuildUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    );

    let mut request = CheckBuildRequest::new(settings.catalog.clone(), settings.build.clone())
        .with_eligible_categories(settings.eligible.clone());
    if let Some(images) = settings.placeholder_images.clone() {
        request = request.with_placeholder_images(images);
    }

    let response = use_case.execute(request)?;

    progress_reporter.report(FormatterFactory::progress_message(settings.format));
    let report = BuildReportBuilder::build(&response, &settings.currency_symbol);
    let formatted_output = FormatterFactory::create(settings.format).format(&report)?;

    PresenterFactory::create(PresenterType::from(settings.output)).present(&formatted_output)?;

    if settings.fail_on_critical && response.has_critical_issues() {
        progress_reporter.report_error(&format!(
            "❌ {} critical compatibility issue(s) found",
            response.issues.critical.len()
        ));
        return Ok(ExitCode::CriticalIssuesDetected);
    }

    Ok(ExitCode::Success)
}

/// Directory searched for the config file: the build file's own directory
fn config_dir(build: &Path) -> &Path {
    match build.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
