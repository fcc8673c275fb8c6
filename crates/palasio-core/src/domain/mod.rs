// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Palasio.
//!
//! This module contains pure generation logic with no I/O. Directory
//! creation, file writes, and dependency installation are reached only
//! through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or process calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable configuration**: plans and catalogs are built once, then shared
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    directory_plan::DirectoryPlan,
    project_spec::ProjectSpec,
    render_context::RenderContext,
    report::{GenerationPlan, GenerationReport, InstallOutcome, InstallWarning},
    template::{RenderFn, TemplateCatalog, TemplateCatalogBuilder, TemplateContent, TemplateEntry},
};

pub use error::{DomainError, ErrorCategory, UnplannedDirectory};

pub use value_objects::{GenerationStage, ProjectName, TemplateGroup};

pub use validation::DomainValidator;
