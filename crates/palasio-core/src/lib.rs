//! Palasio Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers of the Palasio
//! monorepo generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          palasio-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerationService, FileWriter, ...)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, Installer)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    palasio-adapters (Infrastructure)    │
//! │ (LocalFilesystem, CommandInstaller, ...)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectName, DirectoryPlan, Catalog)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use palasio_core::{
//!     application::GenerationService,
//!     domain::{DomainValidator, ProjectSpec},
//! };
//!
//! // 1. Validate the name
//! let name = DomainValidator::validate_name(Some("my-app"))?;
//! let spec = ProjectSpec::new(name, std::env::current_dir()?);
//!
//! // 2. Wire the service with a layout and adapters
//! let service = GenerationService::new(
//!     Arc::new(plan),
//!     Arc::new(catalog),
//!     Box::new(LocalFilesystem::new()),
//!     Box::new(CommandInstaller::bun()),
//! );
//!
//! // 3. Generate
//! service.preflight(&spec)?;
//! let report = service.generate(&spec)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Convenience re-exports at crate root
pub use error::{ErrorCategory, PalasioError, PalasioResult};

/// Prelude for common imports
pub mod prelude {
    pub use crate::application::{
        ApplicationError, Filesystem, FilesystemError, GenerationService, InstallOptions,
        Installer,
    };
    pub use crate::domain::{
        DirectoryPlan, DomainError, DomainValidator, GenerationPlan, GenerationReport,
        GenerationStage, InstallOutcome, InstallWarning, ProjectName, ProjectSpec,
        RelativePath, RenderContext, TemplateCatalog, TemplateContent, TemplateGroup,
    };
    pub use crate::error::{PalasioError, PalasioResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
