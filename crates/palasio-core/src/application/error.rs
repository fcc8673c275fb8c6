//! Application layer errors.
//!
//! These errors represent failures while materializing a project, not
//! validation of its inputs. Input errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::GenerationStage;
use crate::error::ErrorCategory;

/// Low-level failure reported by a [`Filesystem`](super::ports::Filesystem)
/// adapter. Services attach the pipeline stage when they wrap it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to {operation} {path}: {reason}")]
pub struct FilesystemError {
    pub path: PathBuf,
    pub operation: &'static str,
    pub reason: String,
}

impl FilesystemError {
    pub fn new(path: impl Into<PathBuf>, operation: &'static str, reason: impl ToString) -> Self {
        Self {
            path: path.into(),
            operation,
            reason: reason.to_string(),
        }
    }
}

/// Errors that occur during generation orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The target root already exists.
    #[error("Directory {path} already exists")]
    ProjectExists { path: PathBuf },

    /// Creating a planned directory failed.
    #[error("Could not create directory {}: {}", .source.path.display(), .source.reason)]
    DirectoryCreation {
        #[source]
        source: FilesystemError,
    },

    /// Writing a catalog file failed (including an unexpected existing path).
    #[error("Could not write {}: {}", .source.path.display(), .source.reason)]
    FileWrite {
        #[source]
        source: FilesystemError,
    },
}

impl ApplicationError {
    /// The path the failure is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ProjectExists { path } => path,
            Self::DirectoryCreation { source } | Self::FileWrite { source } => &source.path,
        }
    }

    /// The generation stage this error belongs to.
    pub fn stage(&self) -> GenerationStage {
        match self {
            Self::ProjectExists { .. } => GenerationStage::PreflightConflict,
            Self::DirectoryCreation { .. } => GenerationStage::DirectoryCreation,
            Self::FileWrite { .. } => GenerationStage::FileWrite,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::DirectoryCreation { source } | Self::FileWrite { source } => vec![
                format!("Failed at: {}", source.path.display()),
                "Check that you have write permissions and free disk space".into(),
                "Partial output was left on disk; remove it before retrying".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Conflict,
            Self::DirectoryCreation { .. } | Self::FileWrite { .. } => ErrorCategory::Filesystem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_attributed() {
        let fs = FilesystemError::new("/x", "write file", "denied");
        assert_eq!(
            ApplicationError::FileWrite { source: fs.clone() }.stage(),
            GenerationStage::FileWrite
        );
        assert_eq!(
            ApplicationError::DirectoryCreation { source: fs }.stage(),
            GenerationStage::DirectoryCreation
        );
        assert_eq!(
            ApplicationError::ProjectExists { path: "/x".into() }.stage(),
            GenerationStage::PreflightConflict
        );
    }

    #[test]
    fn message_names_failing_path() {
        let err = ApplicationError::FileWrite {
            source: FilesystemError::new("/out/app/package.json", "write file", "disk full"),
        };
        assert_eq!(err.to_string(), "Could not write /out/app/package.json: disk full");
        assert_eq!(err.path(), std::path::Path::new("/out/app/package.json"));
    }
}
