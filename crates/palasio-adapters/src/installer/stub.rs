//! Installers that never spawn anything.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use palasio_core::{application::ports::Installer, domain::InstallOutcome};

/// Does nothing and reports `Skipped`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInstaller;

impl Installer for NoopInstaller {
    fn install(&self, _root: &Path, _timeout: Option<Duration>) -> InstallOutcome {
        InstallOutcome::Skipped
    }

    fn command_line(&self) -> String {
        String::new()
    }
}

/// Returns a fixed outcome and records every call (testing).
#[derive(Debug, Clone)]
pub struct FixedInstaller {
    outcome: InstallOutcome,
    command: String,
    calls: Arc<Mutex<Vec<(PathBuf, Option<Duration>)>>>,
}

impl FixedInstaller {
    pub fn new(outcome: InstallOutcome) -> Self {
        Self {
            outcome,
            command: "bun install".to_string(),
            calls: Arc::default(),
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Roots and timeouts passed to `install`, in call order.
    pub fn calls(&self) -> Vec<(PathBuf, Option<Duration>)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Installer for FixedInstaller {
    fn install(&self, root: &Path, timeout: Option<Duration>) -> InstallOutcome {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((root.to_path_buf(), timeout));
        }
        self.outcome.clone()
    }

    fn command_line(&self) -> String {
        self.command.clone()
    }
}
