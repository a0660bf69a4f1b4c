use clap::{Parser, Subcommand};
use sbom_unify::application::dto::OutputFormat;
use sbom_unify::sbom_engine::domain::{MergePolicy, SpecVersion};
use std::path::PathBuf;

/// Validate CycloneDX SBOMs and unify several SBOMs into one
#[derive(Parser, Debug)]
#[command(name = "sbom-unify")]
#[command(version)]
#[command(
    about = "Validate CycloneDX SBOMs (structure and GOST hierarchy) and unify several SBOMs into one",
    long_about = None
)]
pub struct Args {
    /// Show debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one SBOM document and print the report
    Validate(ValidateArgs),
    /// Merge two or more SBOM documents under a new application root
    Unify(UnifyArgs),
}

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// CycloneDX JSON document to validate
    pub file: PathBuf,

    /// Expected CycloneDX spec version: 1.4, 1.5 or 1.6 [default: 1.6]
    #[arg(short, long)]
    pub target: Option<SpecVersion>,

    /// Report format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Probe VCS references (externalReferences of type vcs) over HTTP
    #[arg(long)]
    pub check_vcs: bool,

    /// Timeout for each VCS probe, in seconds [default: 10]
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub vcs_timeout: Option<u64>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to config file (defaults to ./sbom-unify.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct UnifyArgs {
    /// CycloneDX JSON documents to merge, in order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Name of the new root application [default: "Unified Application"]
    #[arg(long)]
    pub app_name: Option<String>,

    /// Version of the new root application [default: 1.0.0]
    #[arg(long)]
    pub app_version: Option<String>,

    /// Manufacturer recorded in metadata.manufacturer
    #[arg(long)]
    pub manufacturer: Option<String>,

    /// strict: reject inputs with structural errors; permissive: merge them with a warning
    #[arg(long)]
    pub policy: Option<MergePolicy>,

    /// Add a dependency edge from the new root to every merged document
    #[arg(long)]
    pub link_sources: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to config file (defaults to ./sbom-unify.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
