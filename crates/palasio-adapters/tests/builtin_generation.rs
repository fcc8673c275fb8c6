//! End-to-end generation of the built-in layout through the real adapters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use palasio_adapters::{FixedInstaller, LocalFilesystem, MemoryFilesystem, builtin};
use palasio_core::application::{
    ApplicationError, DirectoryMaterializer, Filesystem, GenerationService, InstallOptions,
};
use palasio_core::domain::{DomainValidator, GenerationStage, InstallOutcome, InstallWarning, ProjectSpec};
use palasio_core::error::PalasioError;
use tempfile::TempDir;
use walkdir::WalkDir;

fn spec(name: &str, parent: &Path) -> ProjectSpec {
    ProjectSpec::new(DomainValidator::validate_name(Some(name)).unwrap(), parent)
}

fn service(fs: impl Filesystem + 'static, installer: FixedInstaller) -> GenerationService {
    let (plan, catalog) = builtin::layout().unwrap();
    GenerationService::new(plan, catalog, Box::new(fs), Box::new(installer))
}

fn files_under(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

#[test]
fn generates_the_full_tree_on_disk() {
    let temp = TempDir::new().unwrap();
    let installer = FixedInstaller::new(InstallOutcome::Installed);
    let calls = installer.clone();
    let svc = service(LocalFilesystem::new(), installer).with_install_options(InstallOptions {
        enabled: true,
        timeout: Some(Duration::from_secs(60)),
    });

    let spec = spec("my-app", temp.path());
    svc.preflight(&spec).unwrap();
    let report = svc.generate(&spec).unwrap();
    let root = temp.path().join("my-app");

    assert_eq!(report.files.len(), 41);
    assert_eq!(files_under(&root).len(), 41);
    for dir in builtin::DIRECTORIES {
        assert!(root.join(dir).is_dir(), "{dir} missing");
    }
    assert_eq!(calls.calls(), vec![(root.clone(), Some(Duration::from_secs(60)))]);

    // Empty planned directories still exist.
    assert!(root.join("apps/client/public").is_dir());
    assert!(root.join("packages/web-ui/src/lib").is_dir());
}

fn directories_under(root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<_> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    dirs.sort();
    dirs
}

#[test]
fn written_files_match_catalog_exactly() {
    let temp = TempDir::new().unwrap();
    let svc = service(LocalFilesystem::new(), FixedInstaller::new(InstallOutcome::Installed));
    svc.generate(&spec("demo", temp.path())).unwrap();

    let mut expected: Vec<PathBuf> = svc.catalog().destinations().map(Path::to_path_buf).collect();
    expected.sort();
    assert_eq!(files_under(&temp.path().join("demo")), expected);
}

#[test]
fn ensuring_directories_twice_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let plan = builtin::directory_plan().unwrap();
    let fs = LocalFilesystem::new();
    let materializer = DirectoryMaterializer::new(&fs);

    let first = materializer.ensure_directories(temp.path(), &plan).unwrap();
    let after_first = directories_under(temp.path());
    let second = materializer.ensure_directories(temp.path(), &plan).unwrap();

    assert_eq!(first, builtin::DIRECTORIES.len());
    assert_eq!(second, 0);
    assert_eq!(directories_under(temp.path()), after_first);
}

#[test]
fn every_file_ends_with_exactly_one_newline() {
    let temp = TempDir::new().unwrap();
    let svc = service(LocalFilesystem::new(), FixedInstaller::new(InstallOutcome::Installed));
    svc.generate(&spec("demo", temp.path())).unwrap();
    let root = temp.path().join("demo");

    for file in files_under(&root) {
        let text = std::fs::read_to_string(root.join(&file)).unwrap();
        assert!(text.ends_with('\n'), "{}", file.display());
        assert!(!text.ends_with("\n\n"), "{}", file.display());
        assert_eq!(text.trim_start(), text, "{}", file.display());
    }

    let readme = std::fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.starts_with("# demo\n"));
    assert!(readme.ends_with("## License\n\nMIT\n"));
}

#[test]
fn installer_warning_keeps_generated_files() {
    let temp = TempDir::new().unwrap();
    let installer = FixedInstaller::new(InstallOutcome::Warning(InstallWarning::new(
        "`bun` was not found on PATH",
        "bun install",
    )));
    let report = service(LocalFilesystem::new(), installer)
        .generate(&spec("demo", temp.path()))
        .unwrap();

    assert!(report.install_warning().is_some());
    assert_eq!(files_under(&temp.path().join("demo")).len(), 41);
}

#[test]
fn existing_target_fails_preflight_and_is_untouched() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("taken");
    std::fs::create_dir(&root).unwrap();
    std::fs::write(root.join("keep.txt"), "mine").unwrap();

    let svc = service(LocalFilesystem::new(), FixedInstaller::new(InstallOutcome::Installed));
    let err = svc.preflight(&spec("taken", temp.path())).unwrap_err();

    assert_eq!(err.stage(), GenerationStage::PreflightConflict);
    assert_eq!(files_under(&root), vec![PathBuf::from("keep.txt")]);
}

#[test]
fn write_failure_stops_the_run_and_skips_install() {
    let fs = MemoryFilesystem::new();
    fs.fail_on("/out/demo/tooling/prettier-config/index.js");
    let installer = FixedInstaller::new(InstallOutcome::Installed);
    let calls = installer.clone();

    let err = service(fs.clone(), installer)
        .generate(&spec("demo", Path::new("/out")))
        .unwrap_err();

    match err {
        PalasioError::Application(ApplicationError::FileWrite { source }) => {
            assert_eq!(source.path, PathBuf::from("/out/demo/tooling/prettier-config/index.js"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // 4 root files + 5 typescript-config files were written first.
    assert_eq!(fs.list_files().len(), 9);
    assert!(calls.calls().is_empty());
}

#[test]
fn directory_failure_writes_no_files() {
    let fs = MemoryFilesystem::new();
    fs.fail_on("/out/demo/packages/auth/src");

    let err = service(fs.clone(), FixedInstaller::new(InstallOutcome::Installed))
        .generate(&spec("demo", Path::new("/out")))
        .unwrap_err();

    assert_eq!(err.stage(), GenerationStage::DirectoryCreation);
    assert!(fs.list_files().is_empty());
    assert!(
        fs.list_directories()
            .contains(&PathBuf::from("/out/demo/apps/client/public"))
    );
}
