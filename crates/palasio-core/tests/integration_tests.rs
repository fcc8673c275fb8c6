//! Integration tests for palasio-core, through the public API only.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use palasio_core::ErrorCategory;
use palasio_core::prelude::*;

#[derive(Clone, Default)]
struct SharedFs(Arc<Mutex<BTreeMap<PathBuf, Option<String>>>>);

impl SharedFs {
    fn read(&self, path: &str) -> Option<String> {
        self.0.lock().unwrap().get(Path::new(path)).cloned().flatten()
    }
}

impl Filesystem for SharedFs {
    fn create_dir_all(&self, path: &Path) -> Result<(), FilesystemError> {
        let mut entries = self.0.lock().unwrap();
        for ancestor in path.ancestors() {
            entries.entry(ancestor.to_path_buf()).or_insert(None);
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), FilesystemError> {
        self.0
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), Some(content.to_string()));
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.0.lock().unwrap().contains_key(path)
    }
}

struct BrokenInstaller;

impl Installer for BrokenInstaller {
    fn install(&self, _root: &Path, _timeout: Option<Duration>) -> InstallOutcome {
        InstallOutcome::Warning(InstallWarning::new("program not found", self.command_line()))
    }

    fn command_line(&self) -> String {
        "bun install".to_string()
    }
}

fn layout() -> (Arc<DirectoryPlan>, Arc<TemplateCatalog>) {
    let plan = DirectoryPlan::new(["apps/client/app", "packages/shared/src/utils"]).unwrap();
    let catalog = TemplateCatalog::builder()
        .group(TemplateGroup::Root)
        .parameterized("package.json", r#"{ "name": "{{PROJECT_NAME}}" }"#)
        .group(TemplateGroup::Apps)
        .parameterized("apps/client/app/page.tsx", "<h1>{{PROJECT_NAME}}</h1>")
        .group(TemplateGroup::Packages)
        .literal("packages/shared/src/utils/index.ts", "export {};")
        .build()
        .unwrap();
    DomainValidator::validate_layout(&plan, &catalog).unwrap();
    (Arc::new(plan), Arc::new(catalog))
}

#[test]
fn full_generation_with_failed_install_still_succeeds() {
    let (plan, catalog) = layout();
    let fs = SharedFs::default();
    let service = GenerationService::new(plan, catalog, Box::new(fs.clone()), Box::new(BrokenInstaller));

    let name = DomainValidator::validate_name(Some("acme_web")).unwrap();
    let spec = ProjectSpec::new(name, "/tmp/out");
    service.preflight(&spec).unwrap();
    let report = service.generate(&spec).unwrap();

    assert_eq!(
        fs.read("/tmp/out/acme_web/package.json").as_deref(),
        Some("{ \"name\": \"acme_web\" }\n")
    );
    assert_eq!(
        fs.read("/tmp/out/acme_web/apps/client/app/page.tsx").as_deref(),
        Some("<h1>acme_web</h1>\n")
    );
    let warning = report.install_warning().unwrap();
    assert!(warning.remediation.contains("bun install"));

    // A second run against the same parent is a pre-flight conflict.
    let err = service.preflight(&spec).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Conflict);
}

#[test]
fn invalid_names_never_reach_the_filesystem() {
    for bad in ["my app", "a/b", "../x", "héllo", "name."] {
        let err = DomainValidator::validate_name(Some(bad)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidCharacters { .. }), "{bad}");
    }
    assert_eq!(
        DomainValidator::validate_name(None).unwrap_err(),
        DomainError::MissingName
    );
    assert_eq!(
        DomainValidator::validate_name(Some("")).unwrap_err(),
        DomainError::MissingName
    );
}

#[test]
fn rendering_is_deterministic() {
    let (_, catalog) = layout();
    let name = ProjectName::parse(Some("demo")).unwrap();
    let ctx = RenderContext::new(&name);

    let first: Vec<String> = catalog.entries().iter().map(|e| e.render(&ctx)).collect();
    let second: Vec<String> = catalog.entries().iter().map(|e| e.render(&ctx)).collect();
    assert_eq!(first, second);
}
