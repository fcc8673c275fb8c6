//! Infrastructure adapters for Palasio.
//!
//! This crate implements the ports defined in `palasio-core::application::ports`
//! and ships the built-in monorepo layout. It contains all I/O: the local
//! filesystem and the external installer process.

pub mod builtin;
pub mod filesystem;
pub mod installer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{CommandInstaller, FixedInstaller, InstallFailure, NoopInstaller, StdoutPolicy};
