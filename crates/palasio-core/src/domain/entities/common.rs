use super::DomainError;
use serde::Serialize;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to be relative and to stay under its root.
///
/// Invariant: never absolute, never contains `..`, never empty. Enforced at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }

        let mut normal = 0;
        for component in path.components() {
            match component {
                Component::Normal(_) => normal += 1,
                Component::CurDir => {}
                _ => {
                    return Err(DomainError::PathEscapesRoot {
                        path: path.display().to_string(),
                    });
                }
            }
        }
        if normal == 0 {
            return Err(DomainError::PathEscapesRoot {
                path: path.display().to_string(),
            });
        }

        // Drop `./` segments so equal paths compare equal.
        let cleaned: PathBuf = path
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .collect();
        Ok(Self(cleaned))
    }

    /// The parent directory, or `None` for a top-level entry.
    pub fn parent(&self) -> Option<RelativePath> {
        self.0
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| Self(p.to_path_buf()))
    }

    /// Every proper ancestor, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Path> {
        self.0.ancestors().skip(1).filter(|p| !p.as_os_str().is_empty())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_nested_relative_paths() {
        let p = RelativePath::try_new("apps/api/src/index.ts").unwrap();
        assert_eq!(p.as_path(), Path::new("apps/api/src/index.ts"));
    }

    #[test]
    fn strips_current_dir_segments() {
        let p = RelativePath::try_new("./apps/./api").unwrap();
        assert_eq!(p, RelativePath::try_new("apps/api").unwrap());
    }

    #[test]
    fn rejects_absolute() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn rejects_parent_dir_and_empty() {
        assert!(matches!(
            RelativePath::try_new("../outside"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
        assert!(matches!(
            RelativePath::try_new("apps/../../x"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
        assert!(RelativePath::try_new("").is_err());
        assert!(RelativePath::try_new(".").is_err());
    }

    #[test]
    fn parent_of_top_level_file_is_none() {
        assert_eq!(RelativePath::try_new("README.md").unwrap().parent(), None);
        let nested = RelativePath::try_new("tooling/eslint-config/src/base.js").unwrap();
        assert_eq!(
            nested.parent().unwrap().as_path(),
            Path::new("tooling/eslint-config/src")
        );
    }

    #[test]
    fn ancestors_exclude_self_and_empty_root() {
        let p = RelativePath::try_new("a/b/c.txt").unwrap();
        let ancestors: Vec<_> = p.ancestors().collect();
        assert_eq!(ancestors, vec![Path::new("a/b"), Path::new("a")]);
    }
}
