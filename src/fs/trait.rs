//! FileSystem trait definition

use anyhow::Result;
use std::path::Path;

/// Abstraction over the handful of file operations the rewriter and the
/// hook registry need, so both can run against an in-memory tree in tests.
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Replace the contents of a file in place, creating it when absent.
    /// Read-only files are an error.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Create a directory and all of its missing parents
    fn create_dir_all(&self, path: &Path) -> Result<()>;
}
