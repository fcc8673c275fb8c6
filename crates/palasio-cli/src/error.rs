//! Error handling for the Palasio CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use palasio_core::{ErrorCategory as CoreCategory, PalasioError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `palasio-core`: validation, an existing
    /// target, or a fatal filesystem failure mid-run.
    #[error("{0}")]
    Core(#[from] PalasioError),

    // ── Config errors ──────────────────────────────────────────────────────
    /// The configuration could not be read or is invalid.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation outside the generator failed (working directory,
    /// terminal output).
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The JSON report could not be produced.
    #[error("Failed to encode report: {source}")]
    Report {
        #[from]
        source: serde_json::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::ConfigError {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => {
                let mut suggestions = core.suggestions();
                if core.category() == CoreCategory::Validation {
                    suggestions.push("Usage: palasio-setup <project-name>".into());
                }
                suggestions
            }
            Self::ConfigError { .. } => vec![
                format!(
                    "Check your config file (default: {})",
                    crate::config::AppConfig::config_path().display()
                ),
                "Check PALASIO_* environment variables, e.g. PALASIO_INSTALL__COMMAND".into(),
            ],
            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check that the current directory still exists and is readable".into(),
            ],
            Self::Report { .. } => vec!["Retry with --output-format human".into()],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::Filesystem => ErrorCategory::Filesystem,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Filesystem,
            Self::Report { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  1   |
    /// | Filesystem    |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    ///
    /// Code 2 is left to clap for argument-parsing errors.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 1,
            ErrorCategory::Filesystem => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse --verbose for more details.\n");
        }
        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::debug!("User error: {}", self),
            ErrorCategory::Filesystem => tracing::error!("Filesystem error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }
        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad project name or an existing target directory.
    UserError,
    /// Generation aborted on a filesystem failure.
    Filesystem,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use palasio_core::application::{ApplicationError, FilesystemError};
    use palasio_core::domain::DomainError;
    use std::io;
    use std::path::PathBuf;

    fn exists() -> CliError {
        CliError::Core(
            ApplicationError::ProjectExists {
                path: PathBuf::from("/tmp/my-app"),
            }
            .into(),
        )
    }

    fn write_failed() -> CliError {
        CliError::Core(
            ApplicationError::FileWrite {
                source: FilesystemError::new("/tmp/my-app/README.md", "write file", "disk full"),
            }
            .into(),
        )
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn validation_and_conflict_exit_one() {
        assert_eq!(CliError::Core(DomainError::MissingName.into()).exit_code(), 1);
        assert_eq!(exists().exit_code(), 1);
    }

    #[test]
    fn filesystem_failure_exits_three() {
        assert_eq!(write_failed().exit_code(), 3);
    }

    #[test]
    fn configuration_exits_four() {
        let err = CliError::from(anyhow::anyhow!("bad key"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn internal_catalog_bug_exits_one() {
        let err = CliError::Core(DomainError::EmptyCatalog.into());
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn io_error_is_filesystem() {
        let err = CliError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.exit_code(), 3);
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn validation_suggestions_include_usage() {
        let err = CliError::Core(DomainError::MissingName.into());
        assert!(err.suggestions().iter().any(|s| s.starts_with("Usage:")));
    }

    #[test]
    fn filesystem_suggestions_mention_partial_output() {
        assert!(write_failed()
            .suggestions()
            .iter()
            .any(|s| s.contains("Partial output")));
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = exists().format_plain(false);
        assert!(s.contains("Error: Directory /tmp/my-app already exists"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let s = write_failed().format_plain(true);
        assert!(s.contains("Caused by:"));
        assert!(!s.contains("Use --verbose"));
    }
}
