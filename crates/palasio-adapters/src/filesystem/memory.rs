//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use palasio_core::application::{FilesystemError, ports::Filesystem};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and inspect
/// the other afterwards. Individual paths can be marked to fail, which is how
/// the fail-fast paths of the generator are exercised without a real disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    failing: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later `create_dir_all` or `write_file` on `path` fail.
    pub fn fail_on(&self, path: impl Into<PathBuf>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.insert(path.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted by path.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Clear all contents and failure marks.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.clear();
            inner.directories.clear();
            inner.failing.clear();
        }
    }
}

fn lock_error(path: &Path, operation: &'static str) -> FilesystemError {
    FilesystemError::new(path, operation, "memory filesystem lock poisoned")
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), FilesystemError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| lock_error(path, "create directory"))?;

        if inner.failing.contains(path) {
            return Err(FilesystemError::new(path, "create directory", "injected failure"));
        }
        if inner.files.contains_key(path) {
            return Err(FilesystemError::new(path, "create directory", "a file is in the way"));
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), FilesystemError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| lock_error(path, "write file"))?;

        if inner.failing.contains(path) {
            return Err(FilesystemError::new(path, "write file", "injected failure"));
        }

        // Parent must exist, like a real filesystem.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(FilesystemError::new(
                    path,
                    "write file",
                    "parent directory does not exist",
                ));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}
