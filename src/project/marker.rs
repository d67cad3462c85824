//! Locating the configuration marker file

use std::path::{Path, PathBuf};

use super::descriptor::CONFIG_FILE_NAME;

/// A named fixture project used to run the generator outside of a real
/// application. The descriptor is read from `<fixtures_dir>/<name>/.yo-rc.json`
/// while the rewrite itself still happens in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub fixtures_dir: PathBuf,
    pub name: String,
}

impl TestCase {
    pub fn new(fixtures_dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            fixtures_dir: fixtures_dir.into(),
            name: name.into(),
        }
    }

    pub fn project_dir(&self) -> PathBuf {
        self.fixtures_dir.join(&self.name)
    }
}

/// Path of the marker file for a project rooted at `root`, or for the
/// fixture project when a test case is given.
pub fn config_file_path(root: &Path, test_case: Option<&TestCase>) -> PathBuf {
    match test_case {
        Some(case) => case.project_dir().join(CONFIG_FILE_NAME),
        None => root.join(CONFIG_FILE_NAME),
    }
}
