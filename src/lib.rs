//! sbom-unify - CycloneDX SBOM validation and unification
//!
//! This library checks CycloneDX Software Bills of Materials against
//! structural rules and the GOST hierarchy rule (a component must be at least
//! as exposed as anything it contains), and merges several SBOMs into one
//! internally consistent document. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_engine`): Document model, GOST levels, validators and the unifier
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Error types, result alias and file security checks
//!
//! # Example
//!
//! ```no_run
//! use sbom_unify::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let reader = FileSystemReader::new();
//! let engine = SbomEngine::new();
//!
//! let frontend = reader.read_document(Path::new("frontend.cdx.json"))?;
//! let backend = reader.read_document(Path::new("backend.cdx.json"))?;
//!
//! let report = engine.validate(&frontend);
//! println!("valid: {}", report.valid);
//!
//! let outcome = engine.unify(
//!     vec![
//!         SbomSource::new("frontend", frontend),
//!         SbomSource::new("backend", backend),
//!     ],
//!     &UnifyConfig::new("Platform", "1.0.0", "Acme"),
//!     MergePolicy::Strict,
//! )?;
//! println!("{}", CycloneDxFormatter::new().format_document(&outcome.document)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_engine;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CycloneDxFormatter, JsonReportFormatter, MarkdownFormatter,
    };
    pub use crate::adapters::outbound::network::HttpVcsProbe;
    pub use crate::application::dto::{
        OutputFormat, UnifyRequest, UnifyResponse, ValidateRequest, ValidateResponse,
    };
    pub use crate::application::use_cases::{UnifySbomsUseCase, ValidateSbomUseCase};
    pub use crate::application::SbomEngine;
    pub use crate::ports::inbound::SbomEnginePort;
    pub use crate::ports::outbound::{
        DocumentFormatter, DocumentReader, OutputPresenter, ProgressReporter, ReportFormatter,
        VcsProbe,
    };
    pub use crate::sbom_engine::domain::{
        Component, ComponentPath, ComponentType, Dependency, Document, ExternalReference,
        IssueLevel, MergePolicy, ReachabilityOutcome, SbomSource, SpecVersion, UnifyConfig,
        UnifyOutcome, ValidationIssue, ValidationReport,
    };
    pub use crate::sbom_engine::policies::{GostAttribute, GostLevel};
    pub use crate::sbom_engine::services::{
        IdGenerator, SbomValidator, SequentialIdGenerator, Unifier, UuidGenerator,
    };
    pub use crate::shared::error::{ExitCode, SbomError};
    pub use crate::shared::Result;
}
