//! The built-in Bun + TypeScript monorepo layout.
//!
//! [`directory_plan`] and [`catalog`] are the fixed configuration the CLI
//! injects into the generation service. Template text lives in one module per
//! [`TemplateGroup`](palasio_core::domain::TemplateGroup), in write order:
//! root, tooling, apps, packages.

use std::sync::Arc;

use tracing::debug;

use palasio_core::domain::{DirectoryPlan, DomainError, DomainValidator, TemplateCatalog};

mod apps;
mod packages;
mod root;
mod tooling;

/// Directories created before any file, relative to the project root.
pub const DIRECTORIES: [&str; 12] = [
    "apps/api/src",
    "apps/client/app",
    "apps/client/public",
    "packages/auth/src",
    "packages/database/src/schema",
    "packages/shared/src/utils",
    "packages/shared/src/types",
    "packages/web-ui/src/components",
    "packages/web-ui/src/lib",
    "tooling/typescript-config",
    "tooling/eslint-config/src",
    "tooling/prettier-config",
];

pub fn directory_plan() -> Result<DirectoryPlan, DomainError> {
    DirectoryPlan::new(DIRECTORIES)
}

pub fn catalog() -> Result<TemplateCatalog, DomainError> {
    let builder = TemplateCatalog::builder();
    let builder = root::register(builder);
    let builder = tooling::register(builder);
    let builder = apps::register(builder);
    let builder = packages::register(builder);
    builder.build()
}

/// Plan and catalog, checked against each other and ready to share.
pub fn layout() -> Result<(Arc<DirectoryPlan>, Arc<TemplateCatalog>), DomainError> {
    let plan = directory_plan()?;
    let catalog = catalog()?;
    DomainValidator::validate_layout(&plan, &catalog)?;
    debug!(directories = plan.len(), files = catalog.len(), "built-in layout loaded");
    Ok((Arc::new(plan), Arc::new(catalog)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use palasio_core::domain::{ProjectName, RenderContext, TemplateGroup};
    use std::path::Path;

    fn ctx(name: &str) -> RenderContext {
        RenderContext::new(&ProjectName::parse(Some(name)).unwrap())
    }

    #[test]
    fn layout_is_consistent() {
        let (plan, catalog) = layout().unwrap();
        assert_eq!(plan.len(), 12);
        assert_eq!(catalog.len(), 41);
    }

    #[test]
    fn group_sizes() {
        let catalog = catalog().unwrap();
        let count = |g| catalog.group(g).count();
        assert_eq!(count(TemplateGroup::Root), 4);
        assert_eq!(count(TemplateGroup::Tooling), 11);
        assert_eq!(count(TemplateGroup::Apps), 10);
        assert_eq!(count(TemplateGroup::Packages), 16);
    }

    #[test]
    fn groups_are_written_in_order() {
        let catalog = catalog().unwrap();
        let groups: Vec<_> = catalog.entries().iter().map(|e| e.group()).collect();
        let mut sorted = groups.clone();
        sorted.sort_by_key(|g| TemplateGroup::ALL.iter().position(|x| x == g));
        assert_eq!(groups, sorted);
        assert_eq!(
            catalog.entries()[0].destination().as_path(),
            Path::new("package.json")
        );
    }

    #[test]
    fn only_four_entries_use_the_project_name() {
        let catalog = catalog().unwrap();
        let mut parameterized: Vec<_> = catalog
            .entries()
            .iter()
            .filter(|e| e.content().is_parameterized())
            .map(|e| e.destination().to_string())
            .collect();
        parameterized.sort();
        assert_eq!(
            parameterized,
            vec![
                "README.md",
                "apps/client/app/layout.tsx",
                "apps/client/app/page.tsx",
                "package.json",
            ]
        );
    }

    #[test]
    fn project_name_lands_in_rendered_files() {
        let catalog = catalog().unwrap();
        let c = ctx("acme");

        let manifest = catalog.get("package.json").unwrap().render(&c);
        assert!(manifest.contains(r#""name": "acme""#));
        assert!(manifest.contains(r#""format": "prettier --write \"**/*.{ts,tsx,md}\"""#));

        let readme = catalog.get("README.md").unwrap().render(&c);
        assert!(readme.starts_with("# acme\n"));
        assert!(readme.contains("acme/\n├── apps/"));

        let layout = catalog.get("apps/client/app/layout.tsx").unwrap().render(&c);
        assert!(layout.contains("title: 'acme',"));

        let page = catalog.get("apps/client/app/page.tsx").unwrap().render(&c);
        assert!(page.contains("<h1>Welcome to acme</h1>"));
        assert!(page.contains("style={{ padding: '2rem', fontFamily: 'sans-serif' }}"));
    }

    #[test]
    fn escapes_survive_verbatim() {
        let catalog = catalog().unwrap();
        let c = ctx("acme");

        let eslint = catalog.get("tooling/eslint-config/src/base.js").unwrap().render(&c);
        assert!(eslint.contains(r"['^\\u0000'],"));
        assert!(eslint.contains(r"['^\\.\\.', '^\\.'],"));

        let api = catalog.get("apps/api/src/index.ts").unwrap().render(&c);
        assert!(api.contains("console.log(`🚀 Server running on http://localhost:${port}`);"));
    }

    #[test]
    fn no_unrendered_placeholders_remain() {
        let catalog = catalog().unwrap();
        let c = ctx("acme");
        for entry in catalog.entries() {
            assert!(
                !entry.render(&c).contains("{{PROJECT_NAME"),
                "{} still has a placeholder",
                entry.destination()
            );
        }
    }

    #[test]
    fn json_templates_parse() {
        let catalog = catalog().unwrap();
        let c = ctx("acme");
        for entry in catalog.entries() {
            if entry.destination().as_path().extension().is_some_and(|e| e == "json") {
                let text = entry.render(&c);
                serde_json::from_str::<serde_json::Value>(&text)
                    .unwrap_or_else(|e| panic!("{}: {e}", entry.destination()));
            }
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let catalog = catalog().unwrap();
        let a: Vec<_> = catalog.entries().iter().map(|e| e.render(&ctx("x"))).collect();
        let b: Vec<_> = catalog.entries().iter().map(|e| e.render(&ctx("x"))).collect();
        assert_eq!(a, b);
    }
}
