//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generation engine needs from the outside
//! world. The `palasio-adapters` crate provides implementations.

use std::path::Path;
use std::time::Duration;

use crate::application::FilesystemError;
use crate::domain::InstallOutcome;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `palasio_adapters::filesystem::LocalFilesystem` (production)
/// - `palasio_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents. Existing directories are
    /// not an error.
    fn create_dir_all(&self, path: &Path) -> Result<(), FilesystemError>;

    /// Write content to a file, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), FilesystemError>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the external dependency-installation step.
///
/// Implemented by:
/// - `palasio_adapters::installer::CommandInstaller` (runs `bun install`)
/// - `palasio_adapters::installer::NoopInstaller`
/// - `palasio_adapters::installer::FixedInstaller` (testing)
///
/// Implementations never fail the run: every problem becomes
/// [`InstallOutcome::Warning`].
#[cfg_attr(test, mockall::automock)]
pub trait Installer: Send + Sync {
    /// Install dependencies for the project at `root`, blocking until done
    /// or until `timeout` elapses.
    fn install(&self, root: &Path, timeout: Option<Duration>) -> InstallOutcome;

    /// Human-readable command line, used in progress and remediation text.
    fn command_line(&self) -> String;
}
