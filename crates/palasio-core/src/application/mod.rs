//! Application layer for Palasio.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService and its helpers)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DirectoryMaterializer, FileWriter, GenerationService, InstallOptions, normalize_content,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Installer};

pub use error::{ApplicationError, FilesystemError};
