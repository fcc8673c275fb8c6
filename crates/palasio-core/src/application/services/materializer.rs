//! Directory Materializer - idempotent directory creation.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::DirectoryPlan,
};

/// Creates every planned directory under a root.
///
/// Each entry is created together with its missing ancestors, so plan order
/// carries no meaning. Directories that already exist are left untouched.
pub struct DirectoryMaterializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> DirectoryMaterializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Apply `plan` under `root`.
    ///
    /// Returns how many planned directories were newly created. The first
    /// failure aborts; directories created before it stay on disk.
    #[instrument(skip_all, fields(root = %root.display(), planned = plan.len()))]
    pub fn ensure_directories(&self, root: &Path, plan: &DirectoryPlan) -> Result<usize, ApplicationError> {
        let mut created = 0;

        for dir in plan.directories() {
            let path = root.join(dir);
            if self.filesystem.exists(&path) {
                debug!(path = %path.display(), "directory exists, leaving untouched");
                continue;
            }

            self.filesystem
                .create_dir_all(&path)
                .map_err(|source| ApplicationError::DirectoryCreation { source })?;
            debug!(path = %path.display(), "directory created");
            created += 1;
        }

        Ok(created)
    }
}
