use crate::domain::{
    entities::{DirectoryPlan, TemplateCatalog},
    error::{DomainError, UnplannedDirectory},
    value_objects::ProjectName,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers. Every check
/// is pure: no filesystem access.
pub struct DomainValidator;

impl DomainValidator {
    /// The name validator: `Valid` is `Ok(ProjectName)`.
    pub fn validate_name(candidate: Option<&str>) -> Result<ProjectName, DomainError> {
        ProjectName::parse(candidate)
    }

    /// Check the catalog, then that every destination's parent directory
    /// exists once `plan` has been applied. Every uncovered destination is
    /// reported, in catalog order.
    pub fn validate_layout(plan: &DirectoryPlan, catalog: &TemplateCatalog) -> Result<(), DomainError> {
        catalog.validate()?;

        let missing: Vec<UnplannedDirectory> = catalog
            .entries()
            .iter()
            .filter_map(|entry| {
                let parent = entry.destination().parent()?;
                (!plan.covers(parent.as_path())).then(|| UnplannedDirectory {
                    path: entry.destination().to_string(),
                    directory: parent.to_string(),
                })
            })
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::UnplannedDirectories { missing })
        }
    }
}
