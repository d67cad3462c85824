//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SPRING_IMPLICIT: &str =
    "org.springframework.boot.orm.jpa.hibernate.SpringImplicitNamingStrategy";
pub const SPRING_PHYSICAL: &str =
    "org.springframework.boot.orm.jpa.hibernate.SpringPhysicalNamingStrategy";
pub const HIBERNATE_IMPLICIT: &str =
    "org.hibernate.boot.model.naming.ImplicitNamingStrategyLegacyHbmImpl";
pub const HIBERNATE_PHYSICAL: &str =
    "org.hibernate.boot.model.naming.PhysicalNamingStrategyStandardImpl";

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Copies a fixture project into a fresh temporary directory
pub fn copy_fixture(name: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    copy_dir(&fixture_path(name), temp_dir.path());
    temp_dir
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).expect("Failed to create directory");
    for entry in fs::read_dir(from).expect("Failed to read fixture directory") {
        let entry = entry.expect("Failed to read directory entry");
        let target = to.join(entry.file_name());
        if entry.file_type().expect("Failed to read file type").is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).expect("Failed to copy fixture file");
        }
    }
}

pub fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative))
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
}

/// Path to the dbh binary built alongside the tests
pub fn dbh_bin() -> PathBuf {
    // In tests, the binary should be at target/debug/dbh
    let mut path = env::current_exe()
        .expect("Failed to get current executable path")
        .parent()
        .expect("No parent")
        .to_path_buf();

    // If we're in deps/, go up one more level
    if path.ends_with("deps") {
        path = path.parent().expect("No parent").to_path_buf();
    }

    path.join("dbh")
}
