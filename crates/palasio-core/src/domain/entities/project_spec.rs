use std::path::{Path, PathBuf};

use crate::domain::value_objects::ProjectName;

/// One generation run's input: the validated name and where it goes.
///
/// Immutable once built. The target root is `parent/name`; it must not exist
/// when generation begins (checked by the caller through
/// `GenerationService::preflight`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: ProjectName,
    target_root: PathBuf,
}

impl ProjectSpec {
    /// Resolve the target root as `parent_dir/name`.
    pub fn new(name: ProjectName, parent_dir: impl AsRef<Path>) -> Self {
        let target_root = parent_dir.as_ref().join(name.as_str());
        Self { name, target_root }
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn target_root(&self) -> &Path {
        &self.target_root
    }
}
