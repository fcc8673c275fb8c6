//! Generate a monorepo in the current directory.
//!
//! Responsibility: translate CLI arguments and configuration into a
//! `ProjectSpec` and adapters, call the core generation service, and display
//! results. No generation logic lives here.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use palasio_adapters::{CommandInstaller, LocalFilesystem, NoopInstaller, StdoutPolicy, builtin};
use palasio_core::{
    PalasioError,
    application::{GenerationService, InstallOptions, ports::Installer},
    domain::{DomainValidator, GenerationPlan, GenerationReport, InstallOutcome, ProjectSpec},
};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute a generation run.
///
/// Dispatch sequence:
/// 1. Validate the project name (nothing touched on failure)
/// 2. Resolve the target root and wire the service
/// 3. Pre-flight: refuse an existing target root
/// 4. Early-exit if `--dry-run`
/// 5. Generate (directories, files, installer)
/// 6. Report the outcome
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate
    let name = DomainValidator::validate_name(args.project_name.as_deref()).map_err(PalasioError::from)?;

    // 2. Resolve + wire
    let cwd = std::env::current_dir()?;
    let spec = ProjectSpec::new(name, cwd);
    let install = install_options(&args, &config);
    debug!(
        root = %spec.target_root().display(),
        install = install.enabled,
        timeout = ?install.timeout,
        "Generation resolved"
    );

    let (plan, catalog) = builtin::layout().map_err(PalasioError::from)?;
    let installer: Box<dyn Installer> = if args.dry_run {
        Box::new(NoopInstaller)
    } else {
        // A JSON report owns stdout; the installer's chatter goes to stderr.
        let stdout = if output.format() == OutputFormat::Json {
            StdoutPolicy::Stderr
        } else {
            StdoutPolicy::Inherit
        };
        Box::new(AnnouncingInstaller {
            inner: CommandInstaller::new(&config.install.command, config.install.args.clone())
                .with_stdout(stdout),
            output: output.clone(),
        })
    };
    let service = GenerationService::new(plan, catalog, Box::new(LocalFilesystem::new()), installer)
        .with_install_options(install);

    // 3. Pre-flight
    service.preflight(&spec)?;

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        return print_plan(&service.dry_run(&spec), &output);
    }

    // 5. Generate
    output.banner()?;
    output.print(&format!("📁 Creating project: {}", spec.name()))?;
    output.print("")?;
    output.print("📂 Creating directory structure and files...")?;
    info!(project = %spec.name(), "Generation started");

    let report = service.generate(&spec)?;

    // 6. Report
    print_report(&report, &service.install_command(), &output)
}

fn install_options(args: &GenerateArgs, config: &AppConfig) -> InstallOptions {
    let timeout = match args.install_timeout {
        Some(0) => None,
        Some(secs) => Some(Duration::from_secs(secs)),
        None => config.install.timeout(),
    };
    InstallOptions {
        enabled: config.install.enabled && !args.skip_install && !args.dry_run,
        timeout,
    }
}

// ── Installer decoration ──────────────────────────────────────────────────────

/// Prints progress around the real installer, which only runs once every
/// file has been written.
struct AnnouncingInstaller {
    inner: CommandInstaller,
    output: OutputManager,
}

impl Installer for AnnouncingInstaller {
    fn install(&self, root: &Path, timeout: Option<Duration>) -> InstallOutcome {
        let announce = self
            .output
            .success("Files created successfully!")
            .and_then(|()| self.output.print(""))
            .and_then(|()| {
                self.output
                    .print(&format!("📦 Installing dependencies with `{}`...", self.command_line()))
            });
        if let Err(e) = announce {
            debug!(error = %e, "could not write progress");
        }
        self.inner.install(root, timeout)
    }

    fn command_line(&self) -> String {
        self.inner.command_line()
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Envelope for `--output-format json`.
#[derive(Debug, Serialize)]
struct JsonDocument<'a, T: Serialize> {
    version: &'static str,
    generated_at: DateTime<Utc>,
    dry_run: bool,
    #[serde(flatten)]
    body: &'a T,
}

impl<'a, T: Serialize> JsonDocument<'a, T> {
    fn new(body: &'a T, dry_run: bool) -> Self {
        Self {
            version: palasio_core::VERSION,
            generated_at: Utc::now(),
            dry_run,
            body,
        }
    }
}

fn print_plan(plan: &GenerationPlan, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(&JsonDocument::new(plan, true));
    }

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        plan.project,
        plan.target_root.display()
    ))?;
    output.print(&format!("Directories ({}):", plan.directories.len()))?;
    for dir in &plan.directories {
        output.print(&format!("  {dir}/"))?;
    }
    output.print(&format!("Files ({}):", plan.files.len()))?;
    for file in &plan.files {
        output.print(&format!("  {file}"))?;
    }
    Ok(())
}

fn print_report(report: &GenerationReport, install_command: &str, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(&JsonDocument::new(report, false));
    }

    match &report.install {
        InstallOutcome::Installed => {
            output.print("")?;
            output.success("Dependencies installed successfully!")?;
        }
        InstallOutcome::Skipped => {
            output.success("Files created successfully!")?;
            output.info(&format!(
                "Skipped dependency installation. Run `{install_command}` when ready."
            ))?;
        }
        InstallOutcome::Warning(w) => {
            warn!(reason = %w.reason, "Install step reported a warning");
            output.print("")?;
            output.warning(&format!(
                "Failed to install dependencies. Please {}.",
                w.remediation
            ))?;
            output.info(&w.reason)?;
        }
    }

    output.success_box(report.project.as_str(), &report.target_root)?;
    Ok(())
}
