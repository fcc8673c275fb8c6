use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Ordered set of directories that must exist before any file is written.
///
/// Paths are relative to the project root. Duplicates are rejected at build
/// time so the plan reads exactly like what lands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPlan {
    directories: Vec<RelativePath>,
}

impl DirectoryPlan {
    /// Build a plan from relative paths, in the given order.
    pub fn new<I, P>(directories: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut seen = BTreeSet::new();
        let mut planned = Vec::new();

        for dir in directories {
            let dir = RelativePath::try_new(dir)?;
            if !seen.insert(dir.clone()) {
                return Err(DomainError::DuplicatePath {
                    path: dir.to_string(),
                });
            }
            planned.push(dir);
        }

        Ok(Self {
            directories: planned,
        })
    }

    /// A plan with no directories (files then rely on the writer's parent
    /// fallback).
    pub fn empty() -> Self {
        Self {
            directories: Vec::new(),
        }
    }

    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// Every directory that exists once the plan is applied: the planned
    /// entries plus all their ancestors.
    pub fn closure(&self) -> BTreeSet<PathBuf> {
        let mut all = BTreeSet::new();
        for dir in &self.directories {
            all.insert(dir.as_path().to_path_buf());
            for ancestor in dir.ancestors() {
                all.insert(ancestor.to_path_buf());
            }
        }
        all
    }

    /// Whether `dir` exists after the plan is applied.
    pub fn covers(&self, dir: &Path) -> bool {
        self.directories
            .iter()
            .any(|planned| planned.as_path().starts_with(dir))
    }
}
