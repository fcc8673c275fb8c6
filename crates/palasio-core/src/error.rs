//! Unified error handling for Palasio Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, GenerationStage};

/// Root error type for Palasio Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PalasioError {
    /// Invalid input or an inconsistent layout.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Failure while materializing the project.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl PalasioError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// The pipeline stage the failure happened in.
    pub fn stage(&self) -> GenerationStage {
        match self {
            Self::Domain(e) => e.stage(),
            Self::Application(e) => e.stage(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad project name.
    Validation,
    /// The target directory already exists.
    Conflict,
    /// Directory creation or file write failed mid-run.
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type PalasioResult<T> = Result<T, PalasioError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::FilesystemError;

    #[test]
    fn category_and_stage_follow_wrapped_error() {
        let err: PalasioError = DomainError::MissingName.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.stage(), GenerationStage::Validation);

        let err: PalasioError = ApplicationError::DirectoryCreation {
            source: FilesystemError::new("/x", "create directory", "denied"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Filesystem);
        assert_eq!(err.stage(), GenerationStage::DirectoryCreation);
    }

    #[test]
    fn display_is_transparent() {
        let err: PalasioError = DomainError::MissingName.into();
        assert_eq!(err.to_string(), "Project name is required");
    }
}
