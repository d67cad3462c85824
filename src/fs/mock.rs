use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
}

#[derive(Debug, Clone)]
struct MockEntry {
    content: Option<String>,
    kind: EntryKind,
}

/// In-memory file tree rooted at `/mock` (or a custom root).
///
/// Writes can be made to fail per path, immediately or after a number of
/// successful writes, which lets tests drive the rewriter's restore path.
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, MockEntry>>,
    /// Successful writes left before writes to the path start failing
    failing_writes: RwLock<HashMap<PathBuf, usize>>,
    write_log: RwLock<Vec<PathBuf>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            failing_writes: RwLock::new(HashMap::new()),
            write_log: RwLock::new(Vec::new()),
            root,
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent);
        }

        files.insert(
            path,
            MockEntry {
                content: Some(content.to_string()),
                kind: EntryKind::File,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();
        Self::ensure_parents(&mut files, &path);
    }

    /// Make every subsequent `write` to `path` fail.
    pub fn fail_writes_to(&self, path: impl AsRef<Path>) {
        self.fail_writes_after(path, 0);
    }

    /// Let `successes` writes to `path` through, then fail every later one.
    pub fn fail_writes_after(&self, path: impl AsRef<Path>, successes: usize) {
        let path = self.normalize_path(path.as_ref());
        self.failing_writes.write().unwrap().insert(path, successes);
    }

    /// Paths passed to `write`, in call order, including failed attempts.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.write_log.read().unwrap().clone()
    }

    /// Current contents of a file, if it exists.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = self.normalize_path(path.as_ref());
        self.files
            .read()
            .unwrap()
            .get(&path)
            .and_then(|e| e.content.clone())
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert(MockEntry {
                content: None,
                kind: EntryKind::Directory,
            });
        }
    }

    fn kind_of(&self, path: &Path) -> Option<EntryKind> {
        let path = self.normalize_path(path);
        self.files.read().unwrap().get(&path).map(|e| e.kind)
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.kind_of(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.kind_of(path) == Some(EntryKind::Directory)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.kind_of(path) == Some(EntryKind::File)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        let files = self.files.read().unwrap();
        let entry = files
            .get(&path)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))?;

        entry
            .content
            .clone()
            .ok_or_else(|| anyhow!("Not a file: {:?}", path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let path = self.normalize_path(path);
        self.write_log.write().unwrap().push(path.clone());

        if let Some(remaining) = self.failing_writes.write().unwrap().get_mut(&path) {
            if *remaining == 0 {
                return Err(anyhow!("Simulated write failure: {:?}", path));
            }
            *remaining -= 1;
        }

        let mut files = self.files.write().unwrap();
        let parent_is_dir = path
            .parent()
            .and_then(|p| files.get(p))
            .map(|e| e.kind == EntryKind::Directory)
            .unwrap_or(false);
        if !parent_is_dir {
            return Err(anyhow!("Parent directory does not exist: {:?}", path));
        }
        if matches!(files.get(&path), Some(e) if e.kind == EntryKind::Directory) {
            return Err(anyhow!("Is a directory: {:?}", path));
        }

        files.insert(
            path,
            MockEntry {
                content: Some(contents.to_string()),
                kind: EntryKind::File,
            },
        );
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap();
        if matches!(files.get(&path), Some(e) if e.kind == EntryKind::File) {
            return Err(anyhow!("Not a directory: {:?}", path));
        }
        Self::ensure_parents(&mut files, &path);
        Ok(())
    }
}
