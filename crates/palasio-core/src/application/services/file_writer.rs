//! File Writer - normalized writes with a parent-directory fallback.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::RelativePath,
};

/// Trim surrounding whitespace and end with exactly one newline.
pub fn normalize_content(content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 1);
    out.push_str(content.trim());
    out.push('\n');
    out
}

/// Writes rendered content to `root/destination`.
pub struct FileWriter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> FileWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Write `content`, normalized, creating a missing parent directory first.
    ///
    /// An existing file at the destination is overwritten; the orchestrator
    /// guarantees that never happens during a normal run.
    #[instrument(skip_all, fields(destination = %destination))]
    pub fn write_file(
        &self,
        root: &Path,
        destination: &RelativePath,
        content: &str,
    ) -> Result<(), ApplicationError> {
        let path = root.join(destination);

        if let Some(parent) = path.parent() {
            if !self.filesystem.exists(parent) {
                debug!(parent = %parent.display(), "creating missing parent directory");
                self.filesystem
                    .create_dir_all(parent)
                    .map_err(|source| ApplicationError::FileWrite { source })?;
            }
        }

        self.filesystem
            .write_file(&path, &normalize_content(content))
            .map_err(|source| ApplicationError::FileWrite { source })
    }
}
