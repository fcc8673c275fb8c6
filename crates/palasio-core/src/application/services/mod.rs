//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! "generate a monorepo" use case and its building blocks.

pub mod file_writer;
pub mod generation_service;
pub mod materializer;

pub use file_writer::{FileWriter, normalize_content};
pub use generation_service::{GenerationService, InstallOptions};
pub use materializer::DirectoryMaterializer;
