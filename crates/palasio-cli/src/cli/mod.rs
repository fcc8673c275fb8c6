//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No generation logic lives here.

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "palasio-setup",
    bin_name = "palasio-setup",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f680} Create a modern Bun-based monorepo with TypeScript",
    long_about = "palasio-setup generates a Bun + TypeScript monorepo: a Hono API, \
                  a Next.js client, shared packages, and shared lint/format/type \
                  tooling, then installs its dependencies.",
    override_usage = "palasio-setup [OPTIONS] <project-name>",
    after_help = "EXAMPLES:\n\
        \x20 palasio-setup my-awesome-app\n\
        \x20 palasio-setup my-awesome-app --skip-install\n\
        \x20 palasio-setup my-awesome-app --dry-run --output-format json",
    disable_version_flag = true,
)]
pub struct Cli {
    /// Print version.
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version, help = "Print version")]
    pub version: Option<bool>,

    /// What to generate.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Logging, output, and configuration flags.
    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── Generation ────────────────────────────────────────────────────────────────

/// Arguments for a generation run.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Name of the project directory, created in the current directory.
    ///
    /// Optional at the parser level so a missing name is reported by the
    /// name validator with the regular exit code.
    #[arg(value_name = "PROJECT_NAME", help = "Name of your project directory")]
    pub project_name: Option<String>,

    /// Do not run the dependency installer.
    #[arg(long = "skip-install", help = "Skip dependency installation")]
    pub skip_install: bool,

    /// Print what would be created without touching the filesystem.
    #[arg(long = "dry-run", help = "Show the plan without writing anything")]
    pub dry_run: bool,

    /// Stop the installer after this many seconds (0 waits forever).
    #[arg(
        long = "install-timeout",
        value_name = "SECS",
        help = "Installer timeout in seconds (0 = none)"
    )]
    pub install_timeout: Option<u64>,
}

// ── tests ─────────────────────────────────────────────────────────────────────
