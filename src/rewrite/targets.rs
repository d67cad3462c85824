use std::path::{Path, PathBuf};

use crate::project::BuildTool;

/// Spring profile configuration shipped with the application
pub const MAIN_APPLICATION_CONFIG: &str = "src/main/resources/config/application.yml";

/// Spring configuration used by the generated test suite
pub const TEST_APPLICATION_CONFIG: &str = "src/test/resources/config/application.yml";

/// Ordered list of files, relative to the project root, that carry naming
/// strategy class names for a given build tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteTarget {
    paths: Vec<PathBuf>,
}

impl RewriteTarget {
    pub fn for_build_tool(build_tool: BuildTool) -> Self {
        Self {
            paths: vec![
                PathBuf::from(build_tool.build_file()),
                PathBuf::from(MAIN_APPLICATION_CONFIG),
                PathBuf::from(TEST_APPLICATION_CONFIG),
            ],
        }
    }

    pub fn relative_paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Absolute paths under `root`, in target order
    pub fn resolve(&self, root: &Path) -> Vec<PathBuf> {
        self.paths.iter().map(|p| root.join(p)).collect()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
