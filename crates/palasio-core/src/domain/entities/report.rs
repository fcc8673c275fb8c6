use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{entities::common::RelativePath, value_objects::ProjectName};

/// Result of the installation step. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum InstallOutcome {
    /// The installer ran and reported success.
    Installed,
    /// Installation was disabled for this run.
    Skipped,
    /// The installer failed; generation still counts as a success.
    Warning(InstallWarning),
}

impl InstallOutcome {
    pub fn warning(&self) -> Option<&InstallWarning> {
        match self {
            Self::Warning(w) => Some(w),
            _ => None,
        }
    }
}

/// Advisory note attached to a successful run whose installer failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallWarning {
    /// What went wrong (missing tool, exit status, timeout, ...).
    pub reason: String,
    /// The command the user should run by hand.
    pub remediation: String,
}

impl InstallWarning {
    pub fn new(reason: impl Into<String>, command: impl AsRef<str>) -> Self {
        Self {
            reason: reason.into(),
            remediation: format!("run `{}` manually", command.as_ref()),
        }
    }
}

/// What a run would create; produced without touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPlan {
    pub project: ProjectName,
    pub target_root: PathBuf,
    pub directories: Vec<RelativePath>,
    pub files: Vec<RelativePath>,
}

/// Successful generation summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub project: ProjectName,
    pub target_root: PathBuf,
    /// Planned directories, in plan order.
    pub directories: Vec<RelativePath>,
    /// Written files, in catalog order.
    pub files: Vec<RelativePath>,
    pub install: InstallOutcome,
}

impl GenerationReport {
    /// The advisory note, present only when installation failed.
    pub fn install_warning(&self) -> Option<&InstallWarning> {
        self.install.warning()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_remediation_names_command() {
        let w = InstallWarning::new("exit status: 1", "bun install");
        assert_eq!(w.remediation, "run `bun install` manually");
    }

    #[test]
    fn install_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(InstallOutcome::Warning(InstallWarning::new(
            "not found",
            "bun install",
        )))
        .unwrap();
        assert_eq!(json["status"], "warning");
        assert_eq!(json["reason"], "not found");

        let json = serde_json::to_value(InstallOutcome::Skipped).unwrap();
        assert_eq!(json["status"], "skipped");
    }
}
