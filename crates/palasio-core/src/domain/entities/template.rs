//! Template catalog: the ordered registry of files a run produces.
//!
//! ```text
//! TemplateCatalog
//! └── Vec<TemplateEntry>          (ordered, destinations unique)
//!      ├── destination: RelativePath
//!      ├── group: TemplateGroup   (root / tooling / apps / packages)
//!      └── content: TemplateContent
//!           ├── Literal(&'static str)
//!           ├── Parameterized(&'static str)   {{PROJECT_NAME}} etc.
//!           └── Computed(fn(&RenderContext) -> String)
//! ```
//!
//! Rendering is a pure function of the entry and the [`RenderContext`]. The
//! catalog is built once, validated once, and shared read-only afterwards.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{common::RelativePath, render_context::RenderContext},
    error::DomainError,
    value_objects::TemplateGroup,
};

/// A pure render function.
pub type RenderFn = fn(&RenderContext) -> String;

/// How a catalog entry produces its content.
#[derive(Debug, Clone, Copy)]
pub enum TemplateContent {
    /// Emitted verbatim.
    Literal(&'static str),
    /// `{{VARIABLE}}` placeholders substituted from the context.
    Parameterized(&'static str),
    /// Arbitrary pure function of the context.
    Computed(RenderFn),
}

impl TemplateContent {
    pub fn render(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Literal(text) => (*text).to_string(),
            Self::Parameterized(text) => ctx.render(text),
            Self::Computed(render) => render(ctx),
        }
    }

    pub const fn is_parameterized(&self) -> bool {
        !matches!(self, Self::Literal(_))
    }
}

/// One output file: where it goes and how its content is produced.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    destination: RelativePath,
    group: TemplateGroup,
    content: TemplateContent,
}

impl TemplateEntry {
    pub fn new(
        destination: impl Into<PathBuf>,
        group: TemplateGroup,
        content: TemplateContent,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            destination: RelativePath::try_new(destination)?,
            group,
            content,
        })
    }

    pub fn destination(&self) -> &RelativePath {
        &self.destination
    }

    pub fn group(&self) -> TemplateGroup {
        self.group
    }

    pub fn content(&self) -> &TemplateContent {
        &self.content
    }

    /// Render this entry's content. No trailing-newline normalization here;
    /// that belongs to the file writer.
    pub fn render(&self, ctx: &RenderContext) -> String {
        self.content.render(ctx)
    }
}

/// Ordered, validated sequence of [`TemplateEntry`].
///
/// Invariants (checked by [`TemplateCatalog::validate`] and therefore by the
/// builder): at least one entry, every destination unique.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    entries: Vec<TemplateEntry>,
}

impl TemplateCatalog {
    pub fn builder() -> TemplateCatalogBuilder {
        TemplateCatalogBuilder::default()
    }

    /// Wrap already-built entries, validating the catalog invariants.
    pub fn from_entries(entries: Vec<TemplateEntry>) -> Result<Self, DomainError> {
        let catalog = Self { entries };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.destination.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: entry.destination.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Entries in stable declaration order.
    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn group(&self, group: TemplateGroup) -> impl Iterator<Item = &TemplateEntry> {
        self.entries.iter().filter(move |e| e.group == group)
    }

    pub fn destinations(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|e| e.destination.as_path())
    }

    pub fn get(&self, destination: impl AsRef<Path>) -> Option<&TemplateEntry> {
        let destination = destination.as_ref();
        self.entries
            .iter()
            .find(|e| e.destination.as_path() == destination)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fluent builder for [`TemplateCatalog`].
///
/// ```rust
/// use palasio_core::domain::{TemplateCatalog, TemplateGroup};
///
/// let catalog = TemplateCatalog::builder()
///     .group(TemplateGroup::Root)
///     .parameterized("README.md", "# {{PROJECT_NAME}}")
///     .literal(".gitignore", "node_modules")
///     .build()
///     .unwrap();
/// assert_eq!(catalog.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TemplateCatalogBuilder {
    current: TemplateGroup,
    pending: Vec<(PathBuf, TemplateGroup, TemplateContent)>,
}

impl Default for TemplateCatalogBuilder {
    fn default() -> Self {
        Self {
            current: TemplateGroup::Root,
            pending: Vec::new(),
        }
    }
}

impl TemplateCatalogBuilder {
    /// Switch the group for subsequently added entries.
    pub fn group(mut self, group: TemplateGroup) -> Self {
        self.current = group;
        self
    }

    pub fn entry(mut self, destination: impl Into<PathBuf>, content: TemplateContent) -> Self {
        self.pending
            .push((destination.into(), self.current, content));
        self
    }

    pub fn literal(self, destination: impl Into<PathBuf>, text: &'static str) -> Self {
        self.entry(destination, TemplateContent::Literal(text))
    }

    pub fn parameterized(self, destination: impl Into<PathBuf>, text: &'static str) -> Self {
        self.entry(destination, TemplateContent::Parameterized(text))
    }

    pub fn computed(self, destination: impl Into<PathBuf>, render: RenderFn) -> Self {
        self.entry(destination, TemplateContent::Computed(render))
    }

    pub fn build(self) -> Result<TemplateCatalog, DomainError> {
        let entries = self
            .pending
            .into_iter()
            .map(|(path, group, content)| TemplateEntry::new(path, group, content))
            .collect::<Result<Vec<_>, _>>()?;

        TemplateCatalog::from_entries(entries)
    }
}
