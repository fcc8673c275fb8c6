pub mod common;
pub mod directory_plan;
pub mod project_spec;
pub mod render_context;
pub mod report;
pub mod template;

pub use crate::domain::DomainError;
pub use directory_plan::DirectoryPlan;
pub use project_spec::ProjectSpec;
pub use render_context::RenderContext;
pub use template::{TemplateCatalog, TemplateEntry};
