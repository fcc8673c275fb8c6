//! Generation Service - main application orchestrator.
//!
//! This service coordinates the whole run:
//! 1. Apply the directory plan
//! 2. Render and write every catalog entry (fail fast)
//! 3. Invoke the installer (never fatal)
//!
//! Name validation and the pre-flight existence check happen before
//! `generate` is called; [`GenerationService::preflight`] is the helper the
//! caller uses for the latter.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError, FilesystemError,
        ports::{Filesystem, Installer},
        services::{DirectoryMaterializer, FileWriter},
    },
    domain::{
        DirectoryPlan, GenerationPlan, GenerationReport, InstallOutcome, ProjectSpec,
        RenderContext, TemplateCatalog,
    },
    error::PalasioResult,
};

/// Installation settings for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallOptions {
    /// When false the installer is not called and the outcome is `Skipped`.
    pub enabled: bool,
    /// Upper bound on the installer's run time. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout: None,
        }
    }
}

/// Main generation service.
///
/// The directory plan and catalog are injected, shared read-only, and never
/// mutated, so one service can run any number of (sequential) generations.
pub struct GenerationService {
    plan: Arc<DirectoryPlan>,
    catalog: Arc<TemplateCatalog>,
    filesystem: Box<dyn Filesystem>,
    installer: Box<dyn Installer>,
    install: InstallOptions,
}

impl GenerationService {
    /// Create a new generation service with the given layout and adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = GenerationService::new(
    ///     plan,       // Arc<DirectoryPlan>
    ///     catalog,    // Arc<TemplateCatalog>
    ///     filesystem, // impl Filesystem
    ///     installer,  // impl Installer
    /// );
    /// ```
    pub fn new(
        plan: Arc<DirectoryPlan>,
        catalog: Arc<TemplateCatalog>,
        filesystem: Box<dyn Filesystem>,
        installer: Box<dyn Installer>,
    ) -> Self {
        Self {
            plan,
            catalog,
            filesystem,
            installer,
            install: InstallOptions::default(),
        }
    }

    pub fn with_install_options(mut self, install: InstallOptions) -> Self {
        self.install = install;
        self
    }

    pub fn plan(&self) -> &DirectoryPlan {
        &self.plan
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// The installer's command line, for progress and remediation messages.
    pub fn install_command(&self) -> String {
        self.installer.command_line()
    }

    /// Fail with `ProjectExists` if the target root is already present.
    pub fn preflight(&self, spec: &ProjectSpec) -> PalasioResult<()> {
        if self.filesystem.exists(spec.target_root()) {
            return Err(ApplicationError::ProjectExists {
                path: spec.target_root().to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    /// Describe what `generate` would create, without touching the filesystem.
    pub fn dry_run(&self, spec: &ProjectSpec) -> GenerationPlan {
        GenerationPlan {
            project: spec.name().clone(),
            target_root: spec.target_root().to_path_buf(),
            directories: self.plan.directories().to_vec(),
            files: self
                .catalog
                .entries()
                .iter()
                .map(|e| e.destination().clone())
                .collect(),
        }
    }

    /// Generate the project described by `spec`.
    ///
    /// Directory and file failures abort immediately and leave whatever was
    /// already written on disk. Installer failures are recorded in the
    /// report and never turn the run into an error.
    #[instrument(
        skip_all,
        fields(
            run_id = %Uuid::new_v4(),
            project = %spec.name(),
            root = %spec.target_root().display()
        )
    )]
    pub fn generate(&self, spec: &ProjectSpec) -> PalasioResult<GenerationReport> {
        let root = spec.target_root();

        // 1. Directories
        let created = DirectoryMaterializer::new(self.filesystem.as_ref())
            .ensure_directories(root, &self.plan)?;
        info!(planned = self.plan.len(), created, "Directory structure ready");

        // 2. Files
        let ctx = RenderContext::from_spec(spec);
        let writer = FileWriter::new(self.filesystem.as_ref());
        let mut files = Vec::with_capacity(self.catalog.len());

        for entry in self.catalog.entries() {
            let path = root.join(entry.destination());
            if self.filesystem.exists(&path) {
                return Err(ApplicationError::FileWrite {
                    source: FilesystemError::new(path, "write file", "path already exists"),
                }
                .into());
            }

            let content = entry.render(&ctx);
            writer.write_file(root, entry.destination(), &content)?;
            files.push(entry.destination().clone());
        }
        info!(files = files.len(), "Files written");

        // 3. Install
        let install = if self.install.enabled {
            info!(command = %self.installer.command_line(), "Installing dependencies");
            self.installer.install(root, self.install.timeout)
        } else {
            info!("Dependency installation skipped");
            InstallOutcome::Skipped
        };

        if let InstallOutcome::Warning(w) = &install {
            warn!(reason = %w.reason, remediation = %w.remediation, "Dependency installation failed");
        }

        info!("Generation completed successfully");
        Ok(GenerationReport {
            project: spec.name().clone(),
            target_root: root.to_path_buf(),
            directories: self.plan.directories().to_vec(),
            files,
            install,
        })
    }
}
