//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `palasio-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation and file writes
//!   - `Installer`: External dependency installation
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The CLI calls `GenerationService` directly)

pub mod output;

pub use output::{Filesystem, Installer};

#[cfg(test)]
pub use output::{MockFilesystem, MockInstaller};
