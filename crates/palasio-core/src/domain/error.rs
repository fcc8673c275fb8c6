// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::fmt;

use thiserror::Error;

use crate::domain::value_objects::GenerationStage;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported after the run, possibly more than once)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Name validation
    // ========================================================================
    #[error("Project name is required")]
    MissingName,

    #[error(
        "Project name '{name}' contains '{invalid}'; only letters, numbers, hyphens, and underscores are allowed"
    )]
    InvalidCharacters { name: String, invalid: char },

    // ========================================================================
    // Layout invariants (catalog and directory plan)
    // ========================================================================
    #[error("Template catalog is empty")]
    EmptyCatalog,

    #[error("Duplicate destination in template catalog: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Directories missing from the directory plan: {}", join_unplanned(.missing))]
    UnplannedDirectories { missing: Vec<UnplannedDirectory> },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingName => vec![
                "Pass the project name as the first argument".into(),
                "Example: palasio-setup my-awesome-app".into(),
            ],
            Self::InvalidCharacters { invalid, .. } => vec![
                format!("Remove or replace '{}'", invalid),
                "Use letters, numbers, hyphens, and underscores only".into(),
                "Examples: my-app, my_app, app2".into(),
            ],
            Self::DuplicatePath { .. }
            | Self::EmptyCatalog
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::UnplannedDirectories { .. } => vec![
                "The built-in template catalog is inconsistent".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingName | Self::InvalidCharacters { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }

    /// The generation stage this error belongs to.
    pub fn stage(&self) -> GenerationStage {
        GenerationStage::Validation
    }
}

/// A catalog destination whose parent directory the plan does not cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnplannedDirectory {
    pub path: String,
    pub directory: String,
}

impl fmt::Display for UnplannedDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' (needed by '{}')", self.directory, self.path)
    }
}

fn join_unplanned(missing: &[UnplannedDirectory]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
