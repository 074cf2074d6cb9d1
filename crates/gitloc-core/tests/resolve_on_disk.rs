//! Integration test: resolve locators against repositories laid out in a temp dir.

use gitloc_core::repository::{FsRepository, FsRepositoryLocator, Repository};
use gitloc_core::{LocatorError, PathInformation, RepositoryError};
use std::fs;
use tempfile::tempdir;

fn locator_for(path: &std::path::Path) -> String {
    format!("git://{}", path.display())
}

#[test]
fn resolves_file_inside_repository() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/lib.rs"), b"// lib").unwrap();

    let raw = format!("{}#main?blame=1", locator_for(&root.join("src/lib.rs")));
    let info: PathInformation<FsRepository> =
        PathInformation::from_locator(&raw, "git", &FsRepositoryLocator::default()).unwrap();

    assert_eq!(info.repository_path(), root.as_path());
    assert_eq!(info.repository().repository_path(), root.as_path());
    assert_eq!(info.local_path(), "src/lib.rs");
    assert_eq!(info.reference(), "main");
    assert_eq!(info.argument("blame"), Some("1"));
    assert_eq!(
        info.url(),
        format!("git://{}#main?blame=1", root.join("src/lib.rs").display())
    );
}

#[test]
fn directory_walker_locator_resolves_nested_repository() {
    let dir = tempdir().unwrap();
    let outer = dir.path().join("outer");
    let inner = outer.join("vendor/inner");
    fs::create_dir_all(outer.join(".git")).unwrap();
    fs::create_dir_all(inner.join(".git")).unwrap();
    fs::create_dir_all(inner.join("docs")).unwrap();

    let raw = format!("{}#v2/docs", locator_for(&inner));
    let info =
        PathInformation::from_locator(&raw, "git", &FsRepositoryLocator::default()).unwrap();

    assert_eq!(info.repository_path(), inner.as_path());
    assert_eq!(info.local_path(), "docs");
    assert_eq!(info.reference(), "v2");
}

#[test]
fn repository_root_has_empty_local_path() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("repo");
    fs::create_dir_all(root.join(".git")).unwrap();

    let info = PathInformation::from_locator(
        &locator_for(&root),
        "git",
        &FsRepositoryLocator::default(),
    )
    .unwrap();
    assert_eq!(info.local_path(), "");
    assert_eq!(info.reference(), "HEAD");
}

#[test]
fn canonical_url_is_stable() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("repo");
    fs::create_dir_all(root.join(".git")).unwrap();
    let locator = FsRepositoryLocator::default();

    let raw = format!("{}?x=1&y=a+b", locator_for(&root.join("file.txt")));
    let first = PathInformation::from_locator(&raw, "git", &locator).unwrap();
    let second = PathInformation::from_locator(first.url(), "git", &locator).unwrap();

    assert_eq!(first.full_path(), second.full_path());
    assert_eq!(first.reference(), second.reference());
    assert_eq!(first.arguments(), second.arguments());
}

#[test]
fn missing_repository_is_reported() {
    let dir = tempdir().unwrap();
    let locator = FsRepositoryLocator::new(vec![".gitloc-missing-marker".into()], None);
    let raw = locator_for(&dir.path().join("file.txt"));

    let err = PathInformation::from_locator(&raw, "git", &locator).unwrap_err();
    assert!(matches!(
        err,
        LocatorError::Repository(RepositoryError::RepositoryNotFound { .. })
    ));
}
