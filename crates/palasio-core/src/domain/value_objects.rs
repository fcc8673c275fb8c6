//! Domain value objects: ProjectName, TemplateGroup, GenerationStage.
//!
//! These are pure value types with equality-by-value and no identity.
//! `ProjectName` can only be obtained through the name validator, so holding
//! one is proof that validation succeeded.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

// ── ProjectName ──────────────────────────────────────────────────────────────

/// A project name that passed validation.
///
/// Invariant: non-empty, every character in `[A-Za-z0-9_-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate `candidate` and wrap it.
    ///
    /// `None` and `""` both fail with [`DomainError::MissingName`]; the first
    /// character outside `[A-Za-z0-9_-]` fails with
    /// [`DomainError::InvalidCharacters`].
    pub fn parse(candidate: Option<&str>) -> Result<Self, DomainError> {
        let name = match candidate {
            Some(name) if !name.is_empty() => name,
            _ => return Err(DomainError::MissingName),
        };

        if let Some(invalid) = name.chars().find(|c| !is_name_char(*c)) {
            return Err(DomainError::InvalidCharacters {
                name: name.to_string(),
                invalid,
            });
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── TemplateGroup ────────────────────────────────────────────────────────────

/// Logical partition of the template catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateGroup {
    /// Files at the project root (`package.json`, `README.md`, ...).
    Root,
    /// Shared tooling configs under `tooling/`.
    Tooling,
    /// Application scaffolds under `apps/`.
    Apps,
    /// Package scaffolds under `packages/`.
    Packages,
}

impl TemplateGroup {
    pub const ALL: [Self; 4] = [Self::Root, Self::Tooling, Self::Apps, Self::Packages];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Tooling => "tooling",
            Self::Apps => "apps",
            Self::Packages => "packages",
        }
    }
}

impl fmt::Display for TemplateGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── GenerationStage ──────────────────────────────────────────────────────────

/// The pipeline stage a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationStage {
    Validation,
    PreflightConflict,
    DirectoryCreation,
    FileWrite,
    Installation,
}

impl GenerationStage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::PreflightConflict => "preflight-conflict",
            Self::DirectoryCreation => "directory-creation",
            Self::FileWrite => "file-write",
            Self::Installation => "installation",
        }
    }
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_digits_hyphen_underscore() {
        for name in ["my-app", "my_app", "App2", "a", "-", "_", "ABC-def_123"] {
            let parsed = ProjectName::parse(Some(name));
            assert!(parsed.is_ok(), "failed for: {name}");
            assert_eq!(parsed.unwrap().as_str(), name);
        }
    }

    #[test]
    fn empty_or_absent_is_missing_name() {
        assert_eq!(ProjectName::parse(None), Err(DomainError::MissingName));
        assert_eq!(ProjectName::parse(Some("")), Err(DomainError::MissingName));
    }

    #[test]
    fn space_is_invalid_character() {
        assert_eq!(
            ProjectName::parse(Some("My App")),
            Err(DomainError::InvalidCharacters {
                name: "My App".into(),
                invalid: ' ',
            })
        );
    }

    #[test]
    fn rejects_path_separators_dots_and_non_ascii() {
        for name in ["a/b", "a\\b", ".hidden", "my.app", "café", "tab\there", "x!"] {
            assert!(
                matches!(
                    ProjectName::parse(Some(name)),
                    Err(DomainError::InvalidCharacters { .. })
                ),
                "accepted: {name}"
            );
        }
    }

    #[test]
    fn reports_first_offending_character() {
        match ProjectName::parse(Some("ok name!")) {
            Err(DomainError::InvalidCharacters { invalid, .. }) => assert_eq!(invalid, ' '),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn stage_display_is_kebab_case() {
        assert_eq!(GenerationStage::PreflightConflict.to_string(), "preflight-conflict");
        assert_eq!(GenerationStage::FileWrite.to_string(), "file-write");
    }

    #[test]
    fn groups_listed_in_catalog_order() {
        assert_eq!(
            TemplateGroup::ALL.map(|g| g.as_str()),
            ["root", "tooling", "apps", "packages"]
        );
    }
}
