mod cli;

use cli::{Args, Command, UnifyArgs, ValidateArgs};
use owo_colors::OwoColorize;
use sbom_unify::adapters::outbound::console::StderrProgressReporter;
use sbom_unify::adapters::outbound::filesystem::FileSystemReader;
use sbom_unify::adapters::outbound::formatters::CycloneDxFormatter;
use sbom_unify::adapters::outbound::network::HttpVcsProbe;
use sbom_unify::application::dto::{UnifyRequest, ValidateRequest, DEFAULT_VCS_TIMEOUT};
use sbom_unify::application::factories::{FormatterFactory, PresenterFactory};
use sbom_unify::application::use_cases::{UnifySbomsUseCase, ValidateSbomUseCase};
use sbom_unify::application::SbomEngine;
use sbom_unify::config::{discover_config, load_config_from_path, ConfigFile};
use sbom_unify::ports::outbound::DocumentFormatter;
use sbom_unify::sbom_engine::domain::UnifyConfig;
use sbom_unify::shared::error::ExitCode;
use sbom_unify::shared::Result;
use std::path::Path;
use std::process;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Logs go to stderr; stdout carries only the report or document.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Validate(validate) => {
            let config = load_config(validate.config.as_deref())?;
            run_validate(validate, config).await
        }
        Command::Unify(unify) => {
            let config = load_config(unify.config.as_deref())?;
            run_unify(unify, config)
        }
    }
}

/// Explicit `--config`, or `sbom-unify.config.yml` in the working directory
fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(&std::env::current_dir()?)?.unwrap_or_default()),
    }
}

async fn run_validate(args: ValidateArgs, config: ConfigFile) -> Result<ExitCode> {
    let target = args.target.or(config.target()).unwrap_or_default();
    let format = args.format.unwrap_or_default();
    let check_vcs = args.check_vcs || config.check_vcs.unwrap_or(false);
    let timeout = args
        .vcs_timeout
        .or(config.vcs_timeout_secs)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_VCS_TIMEOUT);

    let mut request = ValidateRequest::new(args.file.clone(), target);
    let vcs_probe = if check_vcs {
        request = request.with_vcs_check(timeout);
        Some(HttpVcsProbe::new(timeout)?)
    } else {
        None
    };

    let use_case =
        ValidateSbomUseCase::new(FileSystemReader::new(), vcs_probe, StderrProgressReporter::new());
    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatted = FormatterFactory::create(format)
        .format_report(&response.report, &args.file.display().to_string())?;
    PresenterFactory::for_output(args.output).present(&formatted)?;

    Ok(if response.report.valid {
        ExitCode::Success
    } else {
        ExitCode::ValidationFailed
    })
}

fn run_unify(args: UnifyArgs, config: ConfigFile) -> Result<ExitCode> {
    let policy = args.policy.or(config.policy()).unwrap_or_default();
    let defaults = UnifyConfig::default();
    let unify_config = UnifyConfig {
        app_name: args.app_name.or(config.app_name).unwrap_or(defaults.app_name),
        app_version: args
            .app_version
            .or(config.app_version)
            .unwrap_or(defaults.app_version),
        manufacturer: args
            .manufacturer
            .or(config.manufacturer)
            .unwrap_or(defaults.manufacturer),
        link_sources: args.link_sources || config.link_sources.unwrap_or(false),
    };

    let use_case = UnifySbomsUseCase::new(
        FileSystemReader::new(),
        SbomEngine::new(),
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(UnifyRequest::new(args.files, unify_config, policy))?;

    let formatted = CycloneDxFormatter::new().format_document(&response.document)?;
    PresenterFactory::for_output(args.output).present(&formatted)?;

    Ok(ExitCode::Success)
}
